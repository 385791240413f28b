//! Error types for OxiPress operations.
//!
//! All codec failures are local to a single `compress`/`decompress` call and
//! are reported to the caller; nothing is silently recovered.

use std::io;
use thiserror::Error;

/// The main error type for OxiPress operations.
#[derive(Debug, Error)]
pub enum OxipressError {
    /// I/O error from the file layer (never raised by the codecs themselves).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Huffman header fields are inconsistent with the buffer length.
    #[error("Malformed header: {message}")]
    MalformedHeader {
        /// Description of the header error.
        message: String,
    },

    /// Input length is not a whole number of fixed-size records.
    #[error("Truncated record: {length} bytes is not a multiple of {record_size}")]
    TruncatedRecord {
        /// Length of the offending input.
        length: usize,
        /// Size of one record in bytes.
        record_size: usize,
    },

    /// LZ77 back-reference points before the start of the output.
    #[error("Invalid back-reference: distance {distance} exceeds {available} decoded bytes")]
    InvalidBackReference {
        /// Distance carried by the record.
        distance: usize,
        /// Bytes decoded so far.
        available: usize,
    },

    /// Huffman bit traversal did not land on a complete code.
    #[error("Corrupt stream at bit {bit_position}: {message}")]
    CorruptStream {
        /// Bit position where the corruption was detected.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Input exceeds what the wire format can describe.
    #[error("Input too large: {size} exceeds the format limit of {limit}")]
    InputTooLarge {
        /// Offending size or count.
        size: u64,
        /// Largest value the format can encode.
        limit: u64,
    },

    /// Codec parameters out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Unknown algorithm selector. This is a caller error, not a codec error.
    #[error("Unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type alias for OxiPress operations.
pub type Result<T> = std::result::Result<T, OxipressError>;

impl OxipressError {
    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a truncated record error.
    pub fn truncated_record(length: usize, record_size: usize) -> Self {
        Self::TruncatedRecord {
            length,
            record_size,
        }
    }

    /// Create an invalid back-reference error.
    pub fn invalid_back_reference(distance: usize, available: usize) -> Self {
        Self::InvalidBackReference {
            distance,
            available,
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            bit_position,
            message: message.into(),
        }
    }

    /// Create an input too large error.
    pub fn input_too_large(size: u64, limit: u64) -> Self {
        Self::InputTooLarge { size, limit }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported algorithm error.
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Whether this error came from a codec rejecting its input.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::TruncatedRecord { .. }
                | Self::InvalidBackReference { .. }
                | Self::CorruptStream { .. }
                | Self::InputTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxipressError::truncated_record(7, 2);
        assert!(err.to_string().contains("7 bytes"));

        let err = OxipressError::invalid_back_reference(10, 3);
        assert!(err.to_string().contains("distance 10"));

        let err = OxipressError::unsupported_algorithm("zstd");
        assert!(err.to_string().contains("zstd"));
    }

    #[test]
    fn test_codec_error_classification() {
        assert!(OxipressError::malformed_header("short").is_codec_error());
        let corrupt = OxipressError::corrupt_stream(3, "null child");
        let unsupported = OxipressError::unsupported_algorithm("bz2");
        assert!(corrupt.is_codec_error());
        assert!(!unsupported.is_codec_error());
        assert!(!OxipressError::invalid_config("window").is_codec_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxipressError = io_err.into();
        assert!(matches!(err, OxipressError::Io(_)));
    }
}
