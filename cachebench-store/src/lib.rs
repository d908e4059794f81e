//! # cachebench Store
//!
//! Key-value store access for the benchmark harness.
//!
//! This crate provides:
//! - The [`KeyValueStore`] trait the harness is written against
//! - [`StoreClient`], a `redis` client over one multiplexed connection
//! - [`MemoryStore`], an in-process store with TTL expiry

pub mod client;
pub mod error;
pub mod memory;

pub use client::{StoreClient, StoreConfig};
pub use error::StoreError;
pub use memory::MemoryStore;

use bytes::Bytes;
use std::time::Duration;

/// Default store port.
pub const DEFAULT_PORT: u16 = 6379;

/// Byte-oriented key-value store with per-key expiration.
///
/// Values are opaque; implementations never interpret them.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Stores `value` under `key`, expiring after `ttl`. Overwrites any
    /// existing value.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidTtl` for a TTL under one millisecond, or
    /// a connection/protocol error from the backend.
    async fn set(&mut self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError>;

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the key is absent or expired.
    async fn get(&mut self, key: &str) -> Result<Bytes, StoreError>;
}

/// Expiry argument sent with `SET`: whole seconds use `EX`, anything else
/// is sent in milliseconds with `PX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// `EX <seconds>`
    Seconds(u64),
    /// `PX <milliseconds>`
    Millis(u128),
}

impl Expiry {
    /// Converts a TTL into an expiry argument.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidTtl` if `ttl` is under one millisecond.
    pub fn from_ttl(ttl: Duration) -> Result<Self, StoreError> {
        if ttl.subsec_nanos() == 0 && ttl.as_secs() > 0 {
            return Ok(Self::Seconds(ttl.as_secs()));
        }
        match ttl.as_millis() {
            0 => Err(StoreError::InvalidTtl { ttl }),
            millis => Ok(Self::Millis(millis)),
        }
    }

    /// Returns the option name and its argument.
    #[must_use]
    pub fn to_args(self) -> (&'static str, String) {
        match self {
            Self::Seconds(s) => ("EX", s.to_string()),
            Self::Millis(ms) => ("PX", ms.to_string()),
        }
    }
}
