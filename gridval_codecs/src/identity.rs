use gridval_core::{Compressor, Result};

/// No-op strategy: text bytes travel verbatim behind their length prefix.
///
/// Useful as the baseline for size measurements and for deployments where
/// text payloads are short enough that compression only adds overhead.
pub struct IdentityCompressor;

impl Compressor for IdentityCompressor {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn needs_raw_len(&self) -> bool {
        false
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8], _raw_len: Option<usize>) -> Result<Vec<u8>> {
        Ok(compressed.to_vec())
    }
}
