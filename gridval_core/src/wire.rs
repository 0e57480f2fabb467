//! Byte layout of an encoded record.
//!
//! All integers are big-endian. The fixed prefix is identical for every
//! compression strategy; only the text section varies:
//!
//! ```text
//! [ number:  4 bytes i32 ]
//! [ id_high: 8 bytes u64 ]    ← most-significant 64 bits of the UUID
//! [ id_low:  8 bytes u64 ]    ← least-significant 64 bits
//! [ text section, per strategy: ]
//!   identity:       [ utf8_len: u32 ][ utf8_bytes ]
//!   zstd fast/high: [ raw_len: u32 ][ compressed_len: u32 ][ compressed ]
//!   lz4:            [ compressed_len: u32 ][ compressed ]
//! ```
//!
//! `number` and the UUID halves are fixed-width and never compressed —
//! small fixed fields only pay compression overhead. The zstd layouts
//! persist `raw_len` because decompression there fills an exact-capacity
//! preallocated buffer; the lz4 stream carries its own uncompressed length.
//!
//! The format deliberately carries no strategy tag: the strategy is fixed
//! at codec construction on both sides. Decoding with the wrong strategy is
//! caught structurally — every read below is bounds-checked, and a complete
//! decode must consume the input exactly.

use crate::error::{CodecError, Result};

/// Width of the `number` field.
pub const NUMBER_LEN: usize = 4;

/// Width of the UUID (two big-endian u64 halves).
pub const ID_LEN: usize = 16;

/// Fixed prefix written before the text section: number + id.
pub const FIXED_PREFIX_LEN: usize = NUMBER_LEN + ID_LEN;

/// Width of every length prefix in the text section.
pub const LEN_PREFIX_LEN: usize = 4;

/// Bounds-checked forward reader over an encoded record.
///
/// Every read fails with [`CodecError::MalformedInput`] when fewer bytes
/// remain than the read requires, so truncated input can never panic or
/// silently yield a wrong field.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Consume exactly `n` bytes, failing on truncation.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.buf.len() - self.pos;
        if available < n {
            return Err(CodecError::MalformedInput(format!(
                "truncated input: need {} bytes at offset {}, have {}",
                n, self.pos, available
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let slice = self.take(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(slice);
        Ok(array)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// A complete decode must consume the input exactly; trailing bytes mean
    /// the input was produced by a different layout (or corrupted).
    pub fn finish(self) -> Result<()> {
        let remaining = self.buf.len() - self.pos;
        if remaining != 0 {
            return Err(CodecError::MalformedInput(format!(
                "{} trailing bytes after a complete record",
                remaining
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_and_finish() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(-7i32).to_be_bytes());
        buf.extend_from_slice(&0xDEAD_BEEF_u32.to_be_bytes());
        buf.extend_from_slice(&42u64.to_be_bytes());
        buf.extend_from_slice(b"xyz");

        let mut cur = Cursor::new(&buf);
        assert_eq!(cur.read_i32().unwrap(), -7);
        assert_eq!(cur.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(cur.read_u64().unwrap(), 42);
        assert_eq!(cur.take(3).unwrap(), b"xyz");
        cur.finish().unwrap();
    }

    #[test]
    fn test_truncated_read_fails() {
        let mut cur = Cursor::new(&[1, 2, 3]);
        let err = cur.read_u32().unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));
    }

    #[test]
    fn test_trailing_bytes_fail() {
        let mut cur = Cursor::new(&[1, 2, 3, 4, 5]);
        cur.read_u32().unwrap();
        let err = cur.finish().unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));
    }
}
