//! Prelude module for convenient imports.
//!
//! ```ignore
//! use cachebench::prelude::*;
//! ```

// Core types
pub use cachebench_core::{
    Codec, CodecName, Contract, DecodeError, Record, RecordSet, TypeDescriptor, generate,
    recommend_codec,
};

// Codecs
pub use cachebench_codec::{BinaryCodec, JsonCodec, ProtoCodec, XmlCodec, all_codecs, codec_for};

// Store types
pub use cachebench_store::{KeyValueStore, MemoryStore, StoreClient, StoreConfig, StoreError};

// Bench types
pub use cachebench_bench::{
    BenchConfig, BenchContext, BenchError, BenchSummary, FormatResult, Reporter, connect,
    run_benchmarks,
};
