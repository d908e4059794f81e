//! Benchmark configuration.

use crate::error::{BenchError, Result};
use cachebench_store::{Expiry, StoreConfig};
use std::time::Duration;

/// Default number of records per format.
pub const DEFAULT_RECORD_COUNT: usize = 50_000;

/// Default expiration of every written key.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Settings for one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Records generated per format.
    pub record_count: usize,
    /// Expiration of written keys.
    pub ttl: Duration,
    /// Store connection settings.
    pub store: StoreConfig,
    /// Compare the decoded set with the written one after each read.
    pub verify_round_trip: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            ttl: DEFAULT_TTL,
            store: StoreConfig::default(),
            verify_round_trip: true,
        }
    }
}

impl BenchConfig {
    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }
}

/// Builder for [`BenchConfig`].
#[derive(Debug, Clone, Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    /// Sets the number of records generated per format.
    #[must_use]
    pub fn record_count(mut self, count: usize) -> Self {
        self.config.record_count = count;
        self
    }

    /// Sets the expiration of written keys.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.config.ttl = ttl;
        self
    }

    /// Sets the store connection settings.
    #[must_use]
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Enables or disables round-trip verification.
    #[must_use]
    pub fn verify_round_trip(mut self, enabled: bool) -> Self {
        self.config.verify_round_trip = enabled;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// Returns `BenchError::InvalidConfig` if the record count is zero or
    /// the TTL is not one the store accepts.
    pub fn build(self) -> Result<BenchConfig> {
        if self.config.record_count == 0 {
            return Err(BenchError::invalid_config("record count must be at least 1"));
        }
        Expiry::from_ttl(self.config.ttl).map_err(|e| BenchError::invalid_config(e.to_string()))?;
        Ok(self.config)
    }
}
