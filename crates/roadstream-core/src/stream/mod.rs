// crates/roadstream-core/src/stream/mod.rs

//! # Feature Stream
//!
//! Locates the `features` array of a GeoJSON document and decodes its
//! members one at a time.
//!
//! The pipeline owns a single buffer that moves linearly:
//! [`ChunkReader`](crate::loader::ChunkReader) fills it,
//! [`locate_features`] cuts it down to the text after `[`, and
//! [`FeatureStream`] consumes it value by value.

use crate::config::StreamConfig;
use crate::error::Result;
use crate::loader::open_input;
use std::io::Read;
use std::path::Path;

mod decoder;
mod locate;

pub use decoder::FeatureStream;
pub use locate::{locate_features, FEATURES_MARKER};

/// Opens `path` and positions a decoder inside its `features` array.
pub fn features_from_path(
    path: impl AsRef<Path>,
    config: &StreamConfig,
) -> Result<FeatureStream<Box<dyn Read>>> {
    let reader = open_input(path, config)?;
    FeatureStream::new(reader)
}
