mod identity;
mod lz4_compressor;
mod zstd_compressor;

pub use identity::IdentityCompressor;
pub use lz4_compressor::Lz4Compressor;
pub use zstd_compressor::ZstdCompressor;

use gridval_core::{Compression, Compressor, RecordCodec, Result};
use tracing::debug;

/// Resolve a compression strategy to its engine.
///
/// Called once per codec construction; fails with
/// [`gridval_core::CodecError::Configuration`] when the strategy's
/// algorithm/level combination is unsupported by the runtime.
pub fn compressor_for(strategy: Compression) -> Result<Box<dyn Compressor>> {
    let compressor: Box<dyn Compressor> = match strategy {
        Compression::None => Box::new(IdentityCompressor),
        Compression::ZstdFast => Box::new(ZstdCompressor::fast()?),
        Compression::ZstdHigh => Box::new(ZstdCompressor::high()?),
        Compression::Lz4 => Box::new(Lz4Compressor),
    };
    debug!(strategy = strategy.name(), engine = compressor.name(), "selected compressor");
    Ok(compressor)
}

/// Build a [`RecordCodec`] bound to `strategy`.
pub fn record_codec(strategy: Compression) -> Result<RecordCodec> {
    Ok(RecordCodec::new(compressor_for(strategy)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_covers_every_strategy() {
        for strategy in [
            Compression::None,
            Compression::ZstdFast,
            Compression::ZstdHigh,
            Compression::Lz4,
        ] {
            let compressor = compressor_for(strategy).unwrap();
            let round = compressor
                .decompress(
                    &compressor.compress(b"factory smoke test").unwrap(),
                    compressor.needs_raw_len().then_some(18),
                )
                .unwrap();
            assert_eq!(round, b"factory smoke test");
        }
    }
}
