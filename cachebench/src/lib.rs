//! # cachebench
//!
//! Times four serialization formats writing a synthetic record set to a
//! Redis-compatible key-value store and reading it back.
//!
//! ## Features
//!
//! - **Four formats** - bincode binary, XML, JSON and Protocol Buffers
//! - **RESP client** - async TCP client speaking SET/GET with expiry
//! - **Codec selector** - picks Proto for types carrying a proto contract, JSON otherwise
//! - **In-memory store** - runs the full benchmark without a server
//!
//! ## Quick Start
//!
//! ```ignore
//! use cachebench::prelude::*;
//!
//! let config = BenchConfig::default();
//! let client = connect(&config).await?;
//! let mut ctx = BenchContext::new(config, client, Reporter::new(std::io::stdout()));
//! run_benchmarks(&mut ctx).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Record model, workload generator, codec trait and selector
//! - [`codec`] - The four format adapters
//! - [`store`] - RESP codec, store client and in-memory store
//! - [`bench`] - Timing, reporting and the benchmark driver

pub mod prelude;

/// Record model, codec trait and codec selector.
pub mod core {
    pub use cachebench_core::*;
}

/// Format adapters.
pub mod codec {
    pub use cachebench_codec::*;
}

/// Key-value store access.
pub mod store {
    pub use cachebench_store::*;
}

/// Benchmark driver.
pub mod bench {
    pub use cachebench_bench::*;
}

// Re-export commonly used items at the crate root
pub use cachebench_bench::{BenchConfig, BenchContext, BenchError, BenchSummary, run_benchmarks};
pub use cachebench_core::{Codec, CodecName, Record, RecordSet};
pub use cachebench_store::{KeyValueStore, StoreClient, StoreConfig};
