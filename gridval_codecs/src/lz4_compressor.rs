use gridval_core::{CodecError, Compressor, Result};
use lz4_flex::{compress_prepend_size, decompress_size_prepended};

/// lz4 strategy, size-prepended block format.
///
/// The compressed stream is self-describing — it carries its own
/// uncompressed length — so decode needs no persisted raw length and
/// `needs_raw_len()` is false. Fastest decompression of the bundled
/// engines; best default when text payloads dominate get latency.
pub struct Lz4Compressor;

impl Compressor for Lz4Compressor {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn needs_raw_len(&self) -> bool {
        false
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }

    fn decompress(&self, compressed: &[u8], _raw_len: Option<usize>) -> Result<Vec<u8>> {
        decompress_size_prepended(compressed)
            .map_err(|e| CodecError::Decompression(format!("lz4 decompress: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_is_self_describing() {
        let raw = b"the quick brown fox jumps over the lazy dog".repeat(8);
        let compressed = Lz4Compressor.compress(&raw).unwrap();
        // No raw length supplied on purpose.
        assert_eq!(Lz4Compressor.decompress(&compressed, None).unwrap(), raw);
    }

    #[test]
    fn test_truncated_stream_is_rejected() {
        let compressed = Lz4Compressor.compress(b"some text worth compressing").unwrap();
        let err = Lz4Compressor
            .decompress(&compressed[..compressed.len() - 2], None)
            .unwrap_err();
        assert!(matches!(err, CodecError::Decompression(_)));
    }
}
