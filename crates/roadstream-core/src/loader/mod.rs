// crates/roadstream-core/src/loader/mod.rs

//! # Input Loader
//!
//! Handles the Physical Layer (file I/O, decompression) and hands a
//! plain byte stream to the [`ChunkReader`]. Compression is chosen by
//! the file name suffix, never by sniffing content.

use crate::config::StreamConfig;
use crate::error::{Result, RoadError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

mod chunked;

pub use chunked::ChunkReader;

/// Codec selected from the input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Xz,
    None,
}

impl Compression {
    /// Picks the codec from the last extension of `path`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Compression::Gzip,
            Some("xz") => Compression::Xz,
            _ => Compression::None,
        }
    }
}

/// Opens `path` for chunked reading, decompressing on the fly when the
/// suffix says so.
pub fn open_input(path: impl AsRef<Path>, config: &StreamConfig) -> Result<ChunkReader<Box<dyn Read>>> {
    let path = path.as_ref();
    let stream = open_stream(path)?;
    log::debug!(
        "opened {} ({:?}, chunk size {})",
        path.display(),
        Compression::from_path(path),
        config.chunk_size
    );
    Ok(ChunkReader::new(stream, config.chunk_size))
}

/// Opens a file, buffers it, and wraps it in the decoder matching its suffix.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let compression = Compression::from_path(path);
    // Fail on a compiled-out codec before touching the file.
    check_supported(compression, path)?;

    let file = File::open(path).map_err(|e| {
        RoadError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to open {}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    match compression {
        #[cfg(feature = "compact")]
        Compression::Gzip => Ok(Box::new(flate2::read::MultiGzDecoder::new(reader))),
        #[cfg(feature = "xz")]
        Compression::Xz => Ok(Box::new(xz2::read::XzDecoder::new_multi_decoder(reader))),
        #[allow(unreachable_patterns)]
        _ => Ok(Box::new(reader)),
    }
}

fn check_supported(compression: Compression, path: &Path) -> Result<()> {
    let missing = match compression {
        Compression::Gzip if !cfg!(feature = "compact") => Some("gzip (enable the 'compact' feature)"),
        Compression::Xz if !cfg!(feature = "xz") => Some("xz (enable the 'xz' feature)"),
        _ => None,
    };
    match missing {
        Some(codec) => Err(RoadError::UnsupportedCompression(format!(
            "{} requires {}",
            path.display(),
            codec
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_is_picked_by_suffix() {
        assert_eq!(Compression::from_path(Path::new("a.geojson.gz")), Compression::Gzip);
        assert_eq!(Compression::from_path(Path::new("a.geojson.xz")), Compression::Xz);
        assert_eq!(Compression::from_path(Path::new("a.geojson")), Compression::None);
        assert_eq!(Compression::from_path(Path::new("gz")), Compression::None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = open_input("/definitely/not/here.geojson", &StreamConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, RoadError::Io(_)));
        assert!(err.to_string().contains("/definitely/not/here.geojson"));
    }

    fn read_all(path: &Path) -> Vec<u8> {
        let mut reader = open_input(path, &StreamConfig::with_chunk_size(4)).unwrap();
        let mut buf = Vec::new();
        while reader.read_chunk(&mut buf).unwrap() > 0 {}
        buf
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_input_is_decompressed() {
        use flate2::{write::GzEncoder, Compression as Level};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.geojson.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Level::default());
        enc.write_all(br#"{"features":[]}"#).unwrap();
        enc.finish().unwrap();

        assert_eq!(read_all(&path), br#"{"features":[]}"#);
    }

    #[cfg(feature = "xz")]
    #[test]
    fn xz_input_is_decompressed() {
        use std::io::Write;
        use xz2::write::XzEncoder;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.geojson.xz");
        let mut enc = XzEncoder::new(File::create(&path).unwrap(), 6);
        enc.write_all(br#"{"features":[{"highway":"x"}]}"#).unwrap();
        enc.finish().unwrap();

        assert_eq!(read_all(&path), br#"{"features":[{"highway":"x"}]}"#);
    }

    #[cfg(not(feature = "compact"))]
    #[test]
    fn gzip_without_feature_is_rejected() {
        let err = open_input("roads.geojson.gz", &StreamConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, RoadError::UnsupportedCompression(_)));
    }
}
