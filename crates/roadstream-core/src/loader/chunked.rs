// crates/roadstream-core/src/loader/chunked.rs

use crate::error::Result;
use std::io::Read;

/// Pulls fixed-size blocks from a forward-only source.
///
/// Every block is `chunk_size` bytes except the last one. Once the
/// source reports end-of-stream it is never read again.
pub struct ChunkReader<R> {
    inner: R,
    chunk_size: usize,
    exhausted: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
            exhausted: false,
        }
    }

    /// Appends the next block to `buf` and returns its length. Zero means
    /// end-of-stream.
    pub fn read_chunk(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        if self.exhausted {
            return Ok(0);
        }
        let n = (&mut self.inner).take(self.chunk_size as u64).read_to_end(buf)?;
        self.exhausted = n == 0;
        log::trace!("read chunk of {n} bytes");
        Ok(n)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn appends_fixed_blocks_then_end() {
        let mut reader = ChunkReader::new(Cursor::new(b"0123456789".to_vec()), 4);
        let mut buf = b"xx".to_vec();
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 4);
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 4);
        assert_eq!(buf, b"xx01234567");
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 2);
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 0);
        assert!(reader.is_exhausted());
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 0);
        assert_eq!(buf, b"xx0123456789");
    }

    /// A source that hands out one byte per `read` call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn short_reads_are_coalesced_into_full_blocks() {
        let mut reader = ChunkReader::new(Trickle(Cursor::new(b"hello world".to_vec())), 5);
        let mut buf = Vec::new();
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 5);
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 5);
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 1);
        assert_eq!(reader.read_chunk(&mut buf).unwrap(), 0);
        assert_eq!(buf, b"hello world");
    }
}
