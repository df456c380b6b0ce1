// crates/roadstream-core/src/catalog.rs

//! # Road Catalog
//!
//! Deduplicated road names and route references collected over a run.

use crate::config::RoadConfig;
use crate::error::Result;
use crate::output::write_pretty_ascii;
use crate::road::is_road;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Unique trimmed names and refs.
///
/// Both sets are ordered, so serializing twice from the same input gives
/// byte-identical output. Order is by code point (`"Main St"` before
/// `"Main Street"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub names: BTreeSet<String>,
    pub refs: BTreeSet<String>,
}

/// Counts reported after a catalog is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub names: usize,
    pub refs: usize,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} names and {} refs", self.names, self.refs)
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one feature into the catalog. Non-roads are ignored.
    ///
    /// Every configured name key is read on its own, so a feature with
    /// both `name` and `name:en` contributes both strings.
    ///
    /// Returns whether the feature was a road.
    pub fn add_feature(&mut self, feature: &Value, config: &RoadConfig) -> bool {
        if !is_road(feature, config) {
            return false;
        }
        let Some(props) = feature.get("properties") else {
            return true;
        };

        for key in &config.name_keys {
            if let Some(name) = clean(props.get(key)) {
                self.names.insert(name);
            }
        }
        if let Some(reference) = clean(props.get(&config.ref_key)) {
            self.refs.insert(reference);
        }
        true
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            names: self.names.len(),
            refs: self.refs.len(),
        }
    }

    /// Writes `{"names": [...], "refs": [...]}`, pretty-printed with
    /// two-space indentation, non-ASCII escaped, newline-terminated.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_pretty_ascii(writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!("catalog written to {} ({})", path.display(), self.summary());
        Ok(())
    }
}

/// A string value with surrounding whitespace removed, if anything is left.
fn clean(value: Option<&Value>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
