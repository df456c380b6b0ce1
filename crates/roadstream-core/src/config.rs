// crates/roadstream-core/src/config.rs

//! # Pipeline Configuration
//!
//! Values that shape a run, handed to the pipeline at construction.
//! Nothing here is read from the environment or from disk.

/// Default block size pulled from the input per refill (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// How the input stream is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bytes requested from the source per chunk.
    pub chunk_size: usize,
}

impl StreamConfig {
    /// A zero chunk size is clamped to 1 so every read makes progress.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// What counts as a road, and which of its properties are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadConfig {
    /// Accepted values of `geometry.type`.
    pub geometry_types: Vec<String>,
    /// A road must carry this property (any value).
    pub highway_key: String,
    /// Properties surviving the trimmer.
    pub keep_properties: Vec<String>,
    /// Properties read into the catalog's `names` set. Every key is read,
    /// not only the first one present.
    pub name_keys: Vec<String>,
    /// Property read into the catalog's `refs` set.
    pub ref_key: String,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            geometry_types: strings(&["LineString", "MultiLineString"]),
            highway_key: "highway".to_string(),
            keep_properties: strings(&["name", "name:en", "ref", "highway"]),
            name_keys: strings(&["name", "name:en", "name_en"]),
            ref_key: "ref".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chunk_size_is_clamped() {
        assert_eq!(StreamConfig::with_chunk_size(0).chunk_size, 1);
        assert_eq!(StreamConfig::default().chunk_size, 1_048_576);
    }

    #[test]
    fn default_keep_list_matches_road_fields() {
        let cfg = RoadConfig::default();
        assert_eq!(cfg.keep_properties, ["name", "name:en", "ref", "highway"]);
        assert_eq!(cfg.name_keys, ["name", "name:en", "name_en"]);
    }
}
