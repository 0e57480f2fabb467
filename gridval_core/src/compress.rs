use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Text-compression strategy, chosen once when a codec is constructed and
/// fixed for that codec's lifetime. The strategy affects only how the
/// record's `text` field is laid out on the wire; `number` and `id` are
/// always written raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Text bytes written verbatim behind a length prefix.
    None,
    /// zstd at a low level: fastest of the zstd modes.
    ZstdFast,
    /// zstd at a high level: more encode-time effort, same decode contract
    /// as [`Compression::ZstdFast`].
    ZstdHigh,
    /// lz4 size-prepended block format; the stream carries its own
    /// uncompressed length.
    Lz4,
}

impl Compression {
    /// Strategy name for configuration and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::ZstdFast => "zstd-fast",
            Compression::ZstdHigh => "zstd-high",
            Compression::Lz4 => "lz4",
        }
    }
}

/// Core compression abstraction over the record's text field.
///
/// Each `Compressor` implementation:
/// - Must be stateless per call — no mutable scratch shared between
///   invocations. This is the invariant that lets one codec instance serve
///   any number of concurrent encode/decode calls without locks.
/// - Declares via [`needs_raw_len`](Compressor::needs_raw_len) whether the
///   wire format must persist the uncompressed length next to the
///   compressed length. Engines that decompress into an exact-capacity
///   preallocated buffer need it; self-describing streams do not.
pub trait Compressor: Send + Sync {
    /// Human-readable engine name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether decode requires the uncompressed length as an input, and the
    /// wire therefore persists it.
    fn needs_raw_len(&self) -> bool;

    /// Compress one text payload. Identity for the no-op strategy.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress one text payload.
    ///
    /// `raw_len` is `Some` exactly when [`needs_raw_len`](Compressor::needs_raw_len)
    /// is true, carrying the persisted uncompressed length; implementations
    /// with self-describing streams ignore it.
    fn decompress(&self, compressed: &[u8], raw_len: Option<usize>) -> Result<Vec<u8>>;
}
