use gridval_core::{CodecError, Compressor, Result};

/// Level used by [`ZstdCompressor::fast`].
pub const FAST_LEVEL: i32 = 1;

/// Level used by [`ZstdCompressor::high`].
pub const HIGH_LEVEL: i32 = 19;

/// Zstandard strategy.
///
/// Decompression fills an exact-capacity preallocated buffer
/// (`zstd::bulk::decompress` takes the output size as an argument), so the
/// wire format persists the uncompressed length for this family:
/// `needs_raw_len()` is true. The fast and high variants differ only in
/// encode-time effort — any zstd codec decodes either's output.
#[derive(Debug)]
pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    /// Validate `level` against the runtime's supported range.
    pub fn new(level: i32) -> Result<Self> {
        let range = zstd::compression_level_range();
        if !range.contains(&level) {
            return Err(CodecError::Configuration(format!(
                "zstd level {} outside supported range {:?}",
                level, range
            )));
        }
        Ok(Self { level })
    }

    /// Low-effort mode: fastest zstd encoding.
    pub fn fast() -> Result<Self> {
        Self::new(FAST_LEVEL)
    }

    /// High-effort mode: smallest output, same decode contract as `fast`.
    pub fn high() -> Result<Self> {
        Self::new(HIGH_LEVEL)
    }
}

impl Compressor for ZstdCompressor {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn needs_raw_len(&self) -> bool {
        true
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        zstd::bulk::compress(raw, self.level)
            .map_err(|e| CodecError::Encoding(format!("zstd compress: {}", e)))
    }

    fn decompress(&self, compressed: &[u8], raw_len: Option<usize>) -> Result<Vec<u8>> {
        // The persisted raw_len is the exact output capacity; anything the
        // frame tries to write past it is corruption.
        let capacity = raw_len.ok_or_else(|| {
            CodecError::MalformedInput("zstd payload without a persisted raw length".into())
        })?;
        zstd::bulk::decompress(compressed, capacity)
            .map_err(|e| CodecError::Decompression(format!("zstd decompress: {}", e)))
    }
}
