use uuid::Uuid;

use crate::compress::Compressor;
use crate::error::{CodecError, Result};
use crate::record::Record;
use crate::wire::{Cursor, FIXED_PREFIX_LEN, LEN_PREFIX_LEN};

/// Encoder/decoder for [`Record`] values, bound to one compression strategy
/// for its whole lifetime.
///
/// # Contract
/// - `decode(encode(r)) == r` for every record, including empty and
///   multi-byte UTF-8 text.
/// - Encode either returns a complete, well-formed byte sequence or an
///   error — never partial output.
/// - Decode never panics on arbitrary input: truncation, trailing bytes,
///   and inconsistent declared lengths all fail with
///   [`CodecError::MalformedInput`]; payloads the engine rejects fail with
///   [`CodecError::Decompression`].
///
/// # Concurrency
/// All methods take `&self` and the bound [`Compressor`] is stateless per
/// call, so one codec (e.g. behind an `Arc`) may serve any number of
/// simultaneous put/get paths.
pub struct RecordCodec {
    compressor: Box<dyn Compressor>,
}

impl RecordCodec {
    /// Bind `compressor` for the lifetime of this codec.
    ///
    /// Strategy-to-engine resolution (and its configuration errors) lives in
    /// `gridval_codecs::compressor_for`; this constructor accepts any
    /// already-built engine.
    pub fn new(compressor: Box<dyn Compressor>) -> Self {
        Self { compressor }
    }

    /// Engine name, for diagnostics.
    pub fn compressor_name(&self) -> &'static str {
        self.compressor.name()
    }

    /// Serialize `record` into the wire format described in [`crate::wire`].
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let raw = record.text().as_bytes();
        let compressed = self.compressor.compress(raw)?;

        // Both lengths travel as u32 prefixes; reject text the prefix
        // cannot describe before writing anything.
        let raw_len = u32_len(raw.len(), "text")?;
        let compressed_len = u32_len(compressed.len(), "compressed text")?;

        let mut buf = Vec::with_capacity(
            FIXED_PREFIX_LEN + 2 * LEN_PREFIX_LEN + compressed.len(),
        );
        buf.extend_from_slice(&record.number().to_be_bytes());
        let (id_high, id_low) = record.id().as_u64_pair();
        buf.extend_from_slice(&id_high.to_be_bytes());
        buf.extend_from_slice(&id_low.to_be_bytes());

        if self.compressor.needs_raw_len() {
            buf.extend_from_slice(&raw_len.to_be_bytes());
        }
        buf.extend_from_slice(&compressed_len.to_be_bytes());
        buf.extend_from_slice(&compressed);

        Ok(buf)
    }

    /// Parse one record out of `bytes`, consuming the input exactly.
    pub fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let mut cur = Cursor::new(bytes);

        let number = cur.read_i32()?;
        let id = Uuid::from_u64_pair(cur.read_u64()?, cur.read_u64()?);

        let raw_len = if self.compressor.needs_raw_len() {
            Some(cur.read_u32()? as usize)
        } else {
            None
        };
        let compressed_len = cur.read_u32()? as usize;
        let compressed = cur.take(compressed_len)?;
        cur.finish()?;

        let raw = self.compressor.decompress(compressed, raw_len)?;
        if let Some(expected) = raw_len {
            if raw.len() != expected {
                return Err(CodecError::MalformedInput(format!(
                    "text decompressed to {} bytes but wire declares {}",
                    raw.len(),
                    expected
                )));
            }
        }

        let text = String::from_utf8(raw).map_err(|e| {
            CodecError::MalformedInput(format!("decompressed text is not UTF-8: {}", e))
        })?;

        Ok(Record::new(number, text, id))
    }
}

fn u32_len(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        CodecError::Encoding(format!(
            "{} of {} bytes exceeds the u32 length prefix",
            what, len
        ))
    })
}
