// crates/roadstream-core/src/stream/decoder.rs

use super::locate::locate_features;
use crate::config::StreamConfig;
use crate::error::{Result, RoadError};
use crate::loader::ChunkReader;
use serde_json::{Deserializer, Value};
use std::io::Read;
use std::iter::FusedIterator;

/// Lazily decodes the members of a `features` array.
///
/// Each call to [`Iterator::next`] parses exactly one JSON value from the
/// front of the buffer, pulling more chunks when the value is not yet
/// complete. The stream ends at the array's closing `]`. It cannot be
/// rewound: to read again, open the input again.
///
/// The iterator is fused. After the closing bracket or the first error it
/// only returns `None`.
pub struct FeatureStream<R> {
    reader: ChunkReader<R>,
    buf: Vec<u8>,
    /// Start of the unconsumed text in `buf`.
    pos: usize,
    finished: bool,
}

impl<R: Read> FeatureStream<R> {
    /// Runs the array locator on `reader` and returns a stream positioned
    /// on the first member.
    pub fn new(mut reader: ChunkReader<R>) -> Result<Self> {
        let buf = locate_features(&mut reader)?;
        Ok(Self {
            reader,
            buf,
            pos: 0,
            finished: false,
        })
    }

    /// Wraps any byte source, uncompressed.
    pub fn from_reader(source: R, config: &StreamConfig) -> Result<Self> {
        Self::new(ChunkReader::new(source, config.chunk_size))
    }

    /// Drops consumed text and appends the next chunk. Zero means the
    /// source is exhausted.
    fn refill(&mut self) -> Result<usize> {
        self.buf.drain(..self.pos);
        self.pos = 0;
        self.reader.read_chunk(&mut self.buf)
    }

    fn next_feature(&mut self) -> Result<Option<Value>> {
        loop {
            let pending = &self.buf[self.pos..];
            self.pos += pending
                .iter()
                .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b','))
                .count();
            match self.buf.get(self.pos).copied() {
                Some(b']') => return Ok(None),
                Some(_) => break,
                None => {
                    if self.refill()? == 0 {
                        return Err(RoadError::TruncatedStream { source: None });
                    }
                }
            }
        }

        // Retry from the same position on every refill; separators are not
        // stripped again.
        loop {
            let pending = &self.buf[self.pos..];
            let mut values = Deserializer::from_slice(pending).into_iter::<Value>();
            let source = match values.next() {
                Some(Ok(value)) => {
                    let used = values.byte_offset();
                    // A scalar running to the end of the buffer may continue
                    // in the next chunk.
                    let open_ended = used == pending.len()
                        && !matches!(value, Value::Object(_) | Value::Array(_) | Value::String(_));
                    if !open_ended || self.reader.is_exhausted() {
                        self.pos += used;
                        return Ok(Some(value));
                    }
                    None
                }
                Some(Err(e)) if e.is_eof() => Some(e),
                Some(Err(e)) => return Err(RoadError::MalformedFeature(e)),
                None => return Err(RoadError::TruncatedStream { source: None }),
            };
            if self.refill()? == 0 && source.is_some() {
                return Err(RoadError::TruncatedStream { source });
            }
        }
    }
}

impl<R: Read> Iterator for FeatureStream<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_feature().transpose();
        self.finished = !matches!(item, Some(Ok(_)));
        item
    }
}

impl<R: Read> FusedIterator for FeatureStream<R> {}
