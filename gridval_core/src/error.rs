use thiserror::Error;

/// Errors surfaced by codec construction, encode, and decode.
///
/// All failures are synchronous results of the failing call — nothing is
/// retried internally, and no partial output is ever produced alongside an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The requested strategy/level combination is not supported by the
    /// runtime, or a registry invariant (unique type tags) was violated.
    #[error("unsupported codec configuration: {0}")]
    Configuration(String),

    /// The text field cannot be represented in the wire format (length
    /// prefix overflow, or the compression engine rejected the input).
    #[error("failed to encode text field: {0}")]
    Encoding(String),

    /// The byte sequence is truncated, carries trailing garbage, declares
    /// lengths inconsistent with its content, or decompresses to invalid
    /// UTF-8.
    #[error("malformed record bytes: {0}")]
    MalformedInput(String),

    /// The compression engine rejected the compressed payload as corrupt.
    #[error("corrupt compressed data: {0}")]
    Decompression(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CodecError::Configuration("zstd level 99 out of range".into());
        assert_eq!(
            e.to_string(),
            "unsupported codec configuration: zstd level 99 out of range"
        );

        let e = CodecError::MalformedInput("truncated at offset 4".into());
        assert_eq!(e.to_string(), "malformed record bytes: truncated at offset 4");
    }
}
