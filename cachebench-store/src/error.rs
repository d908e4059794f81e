//! Error types for store operations.

use redis::{ErrorKind, RedisError};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("failed to connect to store at {addr}: {source}")]
    Connect {
        /// Store address.
        addr: SocketAddr,
        /// Underlying client error.
        source: RedisError,
    },

    /// Connection attempt exceeded the configured timeout.
    #[error("connection to store at {addr} timed out after {timeout:?}")]
    ConnectTimeout {
        /// Store address.
        addr: SocketAddr,
        /// Configured timeout.
        timeout: Duration,
    },

    /// The connection failed or was dropped after it was established.
    #[error("store connection lost: {0}")]
    Connection(#[source] RedisError),

    /// Key is absent or expired.
    #[error("key '{key}' not found")]
    NotFound {
        /// Requested key.
        key: String,
    },

    /// The store answered with an error reply.
    #[error("store error: {0}")]
    Server(#[source] RedisError),

    /// Reply of an unexpected type.
    #[error("protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// TTL cannot be expressed as a positive number of milliseconds, or
    /// does not fit the clock.
    #[error("invalid ttl {ttl:?}: must be at least one millisecond and fit the clock")]
    InvalidTtl {
        /// Rejected TTL.
        ttl: Duration,
    },
}

impl From<RedisError> for StoreError {
    fn from(e: RedisError) -> Self {
        if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
        {
            Self::Connection(e)
        } else if e.kind() == ErrorKind::TypeError {
            Self::protocol(e.to_string())
        } else {
            Self::Server(e)
        }
    }
}

impl StoreError {
    /// Creates a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Returns true if the store could not be reached or dropped the connection.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. } | Self::ConnectTimeout { .. } | Self::Connection(_)
        )
    }

    /// Returns true if a key was missing or expired.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let dropped: StoreError =
            RedisError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe)).into();
        assert!(dropped.is_connection_error());
        assert!(!dropped.is_not_found());

        let err = StoreError::not_found("json-cache-key");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "key 'json-cache-key' not found");
    }

    #[test]
    fn test_reply_errors_are_not_connection_errors() {
        let server: StoreError =
            RedisError::from((ErrorKind::ResponseError, "WRONGTYPE", "list".to_string())).into();
        assert!(matches!(server, StoreError::Server(_)));
        assert!(!server.is_connection_error());

        let typed: StoreError = RedisError::from((ErrorKind::TypeError, "not a string")).into();
        assert!(matches!(typed, StoreError::Protocol { .. }));
    }
}
