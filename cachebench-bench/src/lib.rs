//! # cachebench Bench
//!
//! Times each serialization format writing to and reading from a key-value
//! store, then runs the codec selector on two of the record types.

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod timer;

pub use config::{BenchConfig, BenchConfigBuilder, DEFAULT_RECORD_COUNT, DEFAULT_TTL};
pub use error::{BenchError, Result};
pub use harness::{BenchContext, BenchSummary, FormatResult, connect, run_benchmarks};
pub use report::Reporter;
pub use timer::{measure, measure_async};
