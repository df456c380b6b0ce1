// crates/roadstream-core/src/stream/locate.rs

use crate::error::{Result, RoadError};
use crate::loader::ChunkReader;
use std::io::Read;

/// Literal that introduces the features array.
///
/// Matched as raw bytes, not structurally: a string value containing
/// `"features"` earlier in the document would be mistaken for the key.
pub const FEATURES_MARKER: &[u8] = b"\"features\"";

/// Scans forward to the `[` that follows the features marker.
///
/// Returns the buffered text starting one byte after that bracket.
/// Everything before it is dropped for good. While the marker is still
/// missing, only the last chunk's worth of text is kept, which is enough
/// as long as the marker is shorter than a chunk.
pub fn locate_features<R: Read>(reader: &mut ChunkReader<R>) -> Result<Vec<u8>> {
    let window = reader.chunk_size().max(FEATURES_MARKER.len());
    let mut buf = Vec::with_capacity(window);
    // Index just past the marker, once seen.
    let mut after_marker: Option<usize> = None;

    loop {
        let searched = buf.len();
        if reader.read_chunk(&mut buf)? == 0 {
            return Err(RoadError::Structure);
        }
        if after_marker.is_none() {
            // The marker may straddle the previous chunk boundary.
            let from = searched.saturating_sub(FEATURES_MARKER.len() - 1);
            after_marker = find(&buf[from..], FEATURES_MARKER).map(|i| from + i + FEATURES_MARKER.len());
        }
        match after_marker {
            Some(start) => {
                if let Some(i) = buf[start..].iter().position(|&b| b == b'[') {
                    log::debug!("found features array");
                    buf.drain(..=start + i);
                    return Ok(buf);
                }
                // Nothing after the marker is a bracket; none of it is needed.
                buf.clear();
                after_marker = Some(0);
            }
            None if buf.len() > window => {
                buf.drain(..buf.len() - window);
            }
            None => {}
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn locate(doc: &str, chunk_size: usize) -> Result<Vec<u8>> {
        let mut reader = ChunkReader::new(Cursor::new(doc.as_bytes().to_vec()), chunk_size);
        locate_features(&mut reader)
    }

    /// The located remainder followed by whatever the reader still holds.
    fn located_tail(doc: &str, chunk_size: usize) -> Vec<u8> {
        let mut reader = ChunkReader::new(Cursor::new(doc.as_bytes().to_vec()), chunk_size);
        let mut rest = locate_features(&mut reader).unwrap();
        while reader.read_chunk(&mut rest).unwrap() > 0 {}
        rest
    }

    #[test]
    fn remainder_starts_after_bracket() {
        let rest = locate(r#"{"type":"FeatureCollection","features":[{"a":1}]}"#, 1024).unwrap();
        assert_eq!(rest, br#"{"a":1}]}"#);
    }

    #[test]
    fn marker_split_across_chunks() {
        for chunk in [1, 2, 3, 5, 7, 11, 16] {
            let rest = located_tail(r#"{"type":"FeatureCollection","features":[1,2]}"#, chunk);
            assert_eq!(rest, b"1,2]}", "chunk size {chunk}");
        }
    }

    #[test]
    fn bracket_far_after_marker() {
        let doc = format!("{{\"features\"{}:{}[]}}", " ".repeat(50), "\n".repeat(50));
        assert_eq!(located_tail(&doc, 4), b"]}");
    }

    #[test]
    fn long_preamble_is_skipped() {
        let doc = format!(
            r#"{{"type":"FeatureCollection","name":"{}","features":[{{}}]}}"#,
            "x".repeat(10_000)
        );
        assert_eq!(located_tail(&doc, 64), b"{}]}");
    }

    #[test]
    fn missing_features_key_is_structure_error() {
        let err = locate(r#"{"type":"FeatureCollection","items":[]}"#, 8).unwrap_err();
        assert!(matches!(err, RoadError::Structure));
    }

    #[test]
    fn marker_without_bracket_is_structure_error() {
        let err = locate(r#"{"features": null}"#, 4).unwrap_err();
        assert!(matches!(err, RoadError::Structure));
    }

    #[test]
    fn empty_input_is_structure_error() {
        assert!(matches!(locate("", 16).unwrap_err(), RoadError::Structure));
    }
}
