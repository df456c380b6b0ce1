// crates/roadstream-core/src/error.rs

use thiserror::Error;

/// Everything that can abort an extraction run.
///
/// None of these are retried. The decoder never tries to resynchronize
/// past a bad value, so the first error ends the stream.
#[derive(Debug, Error)]
pub enum RoadError {
    /// The input ended before the `"features"` marker and its `[` were found.
    #[error("could not find features array in GeoJSON")]
    Structure,

    /// The input ended while the features array was still open.
    #[error("stream ended inside the features array")]
    TruncatedStream {
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A value inside the array is not valid JSON.
    #[error("malformed feature in the features array: {0}")]
    MalformedFeature(#[source] serde_json::Error),

    /// The path carries a compression suffix whose codec is compiled out.
    #[error("unsupported compression: {0}")]
    UnsupportedCompression(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoadError>;
