//! Error types for cachebench core operations.

use crate::codec::CodecName;
use thiserror::Error;

/// Error raised when a byte sequence does not match a codec's framing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before a complete header or payload was read.
    #[error("input too short: required {required} bytes, available {available} bytes")]
    Truncated {
        /// Required size in bytes.
        required: usize,
        /// Available size in bytes.
        available: usize,
    },

    /// Leading magic bytes are not the expected ones.
    #[error("bad magic: expected {expected:?}, actual {actual:?}")]
    BadMagic {
        /// Expected magic bytes.
        expected: [u8; 4],
        /// Magic bytes found in the input.
        actual: [u8; 4],
    },

    /// Format version written by an incompatible encoder.
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch {
        /// Version this decoder understands.
        expected: u16,
        /// Version found in the input.
        actual: u16,
    },

    /// Payload was written for a different record type.
    #[error("type mismatch: expected '{expected}', actual '{actual}'")]
    TypeMismatch {
        /// Type name this decoder understands.
        expected: String,
        /// Type name found in the input.
        actual: String,
    },

    /// Payload could not be parsed by the underlying format library.
    #[error("{codec} payload is malformed: {message}")]
    Malformed {
        /// Codec that rejected the payload.
        codec: CodecName,
        /// Error reported by the format library.
        message: String,
    },

    /// A required field is absent.
    #[error("record {index} is missing required field '{field}' (tag {tag})")]
    MissingField {
        /// Zero-based position of the record in the set.
        index: usize,
        /// Field name.
        field: &'static str,
        /// Field number in the schema contract.
        tag: u32,
    },

    /// Identifier is not a valid 128-bit UUID.
    #[error("record {index} has an invalid id: {message}")]
    InvalidId {
        /// Zero-based position of the record in the set.
        index: usize,
        /// Parser error.
        message: String,
    },

    /// Text payload is not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    Utf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },
}

impl DecodeError {
    /// Creates a malformed-payload error for the given codec.
    pub fn malformed(codec: CodecName, message: impl ToString) -> Self {
        Self::Malformed {
            codec,
            message: message.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Utf8 {
            offset: e.valid_up_to(),
        }
    }
}

/// Core error type for cachebench operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Encoding failed inside the format library.
    #[error("{codec} encode error: {message}")]
    Encode {
        /// Codec that failed.
        codec: CodecName,
        /// Error reported by the format library.
        message: String,
    },

    /// A workload must contain at least one record.
    #[error("workload must contain at least one record")]
    EmptyWorkload,
}

impl Error {
    /// Creates an encode error for the given codec.
    pub fn encode(codec: CodecName, message: impl ToString) -> Self {
        Self::Encode {
            codec,
            message: message.to_string(),
        }
    }
}

/// Result type alias for cachebench core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_offset_is_kept() {
        let bytes = vec![b'a', b'b', 0xFF];
        let err: DecodeError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, DecodeError::Utf8 { offset: 2 });
    }

    #[test]
    fn test_display_messages() {
        let err = DecodeError::VersionMismatch {
            expected: 1,
            actual: 7,
        };
        assert_eq!(err.to_string(), "version mismatch: expected 1, actual 7");

        let err = DecodeError::malformed(CodecName::Json, "expected value");
        assert_eq!(err.to_string(), "Json payload is malformed: expected value");

        let err: Error = err.into();
        assert!(err.to_string().starts_with("decode error:"));
    }
}
