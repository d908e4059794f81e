//! Store client over a single multiplexed Redis connection.

use crate::error::StoreError;
use crate::{DEFAULT_PORT, Expiry, KeyValueStore};
use bytes::Bytes;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Configuration for the store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store address to connect to.
    pub server_addr: SocketAddr,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreConfig {
    /// Creates a new config with the specified store address.
    #[must_use]
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            ..Default::default()
        }
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the `redis://` URL for the configured address.
    #[must_use]
    pub fn url(&self) -> String {
        format!("redis://{}/", self.server_addr)
    }
}

/// Client for a Redis-compatible key-value store.
///
/// Holds one connection for its whole lifetime. Every call is a single
/// request/reply round trip; nothing is cached locally.
pub struct StoreClient {
    connection: MultiplexedConnection,
    server_addr: SocketAddr,
}

impl StoreClient {
    /// Connects to the store with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Store address and connect timeout
    ///
    /// # Errors
    /// Returns `StoreError::Connect` or `StoreError::ConnectTimeout` if the
    /// store is unreachable.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let addr = config.server_addr;
        let client =
            redis::Client::open(config.url()).map_err(|source| StoreError::Connect { addr, source })?;

        let connection =
            tokio::time::timeout(config.connect_timeout, client.get_multiplexed_async_connection())
                .await
                .map_err(|_| StoreError::ConnectTimeout {
                    addr,
                    timeout: config.connect_timeout,
                })?
                .map_err(|source| StoreError::Connect { addr, source })?;

        tracing::info!("Connected to store at {}", addr);
        Ok(Self {
            connection,
            server_addr: addr,
        })
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    /// Returns `StoreError` if the round trip fails or the reply is not `PONG`.
    pub async fn ping(&mut self) -> Result<(), StoreError> {
        let reply: String = redis::cmd("PING").query_async(&mut self.connection).await?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(StoreError::protocol(format!("unexpected reply to PING: {reply}")))
        }
    }

    /// Stores `value` under `key` with an expiration.
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Opaque value bytes
    /// * `ttl` - Expiration; whole seconds are sent as `EX`, anything else as `PX`
    ///
    /// # Errors
    /// Returns `StoreError` if the TTL is invalid or the store rejects the write.
    pub async fn set(&mut self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError> {
        let (option, amount) = Expiry::from_ttl(ttl)?.to_args();
        tracing::debug!("SET {} ({} bytes, {} {})", key, value.len(), option, amount);

        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg(option)
            .arg(amount)
            .query_async(&mut self.connection)
            .await?;
        Ok(())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Arguments
    /// * `key` - Cache key
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the key is absent or expired.
    pub async fn get(&mut self, key: &str) -> Result<Bytes, StoreError> {
        let value: Option<Vec<u8>> = self.connection.get(key).await?;
        match value {
            Some(value) => {
                tracing::debug!("GET {} ({} bytes)", key, value.len());
                Ok(Bytes::from(value))
            }
            None => Err(StoreError::not_found(key)),
        }
    }

    /// Deletes `key`. Returns true if a key was removed.
    ///
    /// # Errors
    /// Returns `StoreError` if the round trip fails.
    pub async fn del(&mut self, key: &str) -> Result<bool, StoreError> {
        let removed: i64 = self.connection.del(key).await?;
        Ok(removed > 0)
    }

    /// Returns the configured store address.
    #[must_use]
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

impl KeyValueStore for StoreClient {
    async fn set(&mut self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError> {
        StoreClient::set(self, key, value, ttl).await
    }

    async fn get(&mut self, key: &str) -> Result<Bytes, StoreError> {
        StoreClient::get(self, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.server_addr.port(), 6379);
        assert!(config.server_addr.ip().is_loopback());
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.url(), "redis://127.0.0.1:6379/");
    }

    #[test]
    fn test_store_config_builder() {
        let addr: SocketAddr = "10.0.0.5:7000".parse().unwrap();
        let config = StoreConfig::new(addr).connect_timeout(Duration::from_millis(250));

        assert_eq!(config.server_addr, addr);
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop to get a port with no listener.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = StoreClient::connect(StoreConfig::new(addr)).await;
        let err = result.err().unwrap();
        assert!(err.is_connection_error(), "unexpected error: {err}");
    }
}
