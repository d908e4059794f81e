//! # cachebench Core
//!
//! Core types and traits shared by every cachebench crate.
//!
//! This crate provides:
//! - The [`Record`] and [`RecordSet`] workload types
//! - The deterministic workload generator ([`generate`])
//! - The [`Codec`] trait implemented by every serialization format
//! - Type descriptors and the format selector ([`recommend_codec`])
//! - Error types for encoding/decoding operations

pub mod codec;
pub mod descriptor;
pub mod error;
pub mod record;
pub mod workload;

pub use codec::{Codec, CodecName};
pub use descriptor::{Contract, TypeDescriptor, recommend_codec};
pub use error::{DecodeError, Error, Result};
pub use record::{Record, RecordSet};
pub use workload::generate;
