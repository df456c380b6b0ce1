// crates/roadstream-core/src/lib.rs

//! roadstream-core
//! ===============
//!
//! Pulls road features out of GeoJSON files that are far too large to load.
//!
//! The `features` array is located with a plain byte scan for the
//! `"features"` marker and then decoded one value at a time from a
//! growing buffer. Memory stays at roughly one chunk plus the feature
//! currently being parsed, whatever the size of the file.
//!
//! Known limitation: the marker scan is not structural. A string literal
//! containing `"features"` that appears before the real key (for example
//! inside a top-level `name` property) will be taken for the key.
//!
//! ```rust,no_run
//! use roadstream_core::{features_from_path, is_road, RoadConfig, StreamConfig};
//!
//! let roads = RoadConfig::default();
//! for feature in features_from_path("planet.geojson.xz", &StreamConfig::default())? {
//!     let feature = feature?;
//!     if is_road(&feature, &roads) {
//!         println!("{feature}");
//!     }
//! }
//! # Ok::<(), roadstream_core::RoadError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod road;
pub mod stream;

// Re-exports
pub use crate::catalog::{Catalog, CatalogSummary};
pub use crate::config::{RoadConfig, StreamConfig, DEFAULT_CHUNK_SIZE};
pub use crate::error::{Result, RoadError};
pub use crate::loader::{open_input, ChunkReader, Compression};
pub use crate::output::{write_json_line, write_pretty_ascii, AsciiFormatter};
pub use crate::road::{is_road, trim_properties};
pub use crate::stream::{features_from_path, locate_features, FeatureStream};
