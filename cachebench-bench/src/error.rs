//! Error types for benchmark runs.

use cachebench_core::{CodecName, DecodeError};
use cachebench_store::StoreError;
use thiserror::Error;

/// Error type for benchmark runs.
///
/// Any error aborts the whole run; there is no per-format isolation.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Store connection, protocol or lookup failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Encoding or workload failure.
    #[error("codec error: {0}")]
    Codec(#[from] cachebench_core::Error),

    /// The decoded record set differs from the one written.
    #[error("{codec} round trip changed the record set ({written} written, {read} read)")]
    RoundTripMismatch {
        /// Codec under test.
        codec: CodecName,
        /// Records written.
        written: usize,
        /// Records read back.
        read: usize,
    },

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid benchmark configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl From<DecodeError> for BenchError {
    fn from(e: DecodeError) -> Self {
        Self::Codec(e.into())
    }
}

impl BenchError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true if the store was unreachable or dropped the connection.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_connection_error())
    }

    /// Returns true if a key was missing or expired on read.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }

    /// Returns true if a payload did not match its codec's framing.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Codec(cachebench_core::Error::Decode(_)))
    }
}

/// Result type alias for benchmark runs.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_helpers() {
        let err: BenchError = StoreError::ConnectTimeout {
            addr: "127.0.0.1:6379".parse().unwrap(),
            timeout: std::time::Duration::from_secs(5),
        }
        .into();
        assert!(err.is_connection_error());
        assert!(!err.is_not_found());

        let err: BenchError = StoreError::not_found("xml-cache-key").into();
        assert!(err.is_not_found());

        let err: BenchError = DecodeError::Utf8 { offset: 0 }.into();
        assert!(err.is_decode_error());
        assert!(!err.is_connection_error());
    }
}
