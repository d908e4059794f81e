//! Codec trait and codec identifiers.
//!
//! This module provides the [`Codec`] trait implemented by every
//! serialization format and the [`CodecName`] enum naming them.

use crate::descriptor::TypeDescriptor;
use crate::error::{DecodeError, Result};
use crate::record::{Record, RecordSet};
use std::fmt;

/// Identifies one of the benchmarked serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecName {
    /// Generic object-graph binary format.
    Binary,
    /// Tag-based structured markup.
    Xml,
    /// Schema-less text format.
    Json,
    /// Schema-based binary format keyed by field numbers.
    Proto,
}

impl CodecName {
    /// All codecs in benchmark order.
    pub const ALL: [CodecName; 4] = [Self::Binary, Self::Xml, Self::Json, Self::Proto];

    /// Returns the label used in timing report lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Xml => "Xml",
            Self::Json => "Json",
            Self::Proto => "Proto",
        }
    }

    /// Returns the serializer name used in recommendation lines.
    #[must_use]
    pub const fn serializer_name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Proto => "ProtoBuf",
        }
    }

    /// Returns the store key the benchmark writes this format under.
    #[must_use]
    pub const fn cache_key(self) -> &'static str {
        match self {
            Self::Binary => "binary-cache-key",
            Self::Xml => "xml-cache-key",
            Self::Json => "json-cache-key",
            Self::Proto => "proto-cache-key",
        }
    }
}

impl fmt::Display for CodecName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A paired encode/decode implementation for one serialization format.
///
/// Implementations never mutate their input. The trait is object safe so
/// the harness can iterate over `&dyn Codec`.
pub trait Codec {
    /// Returns the format identifier.
    fn name(&self) -> CodecName;

    /// Returns the record type descriptor this codec serializes.
    fn descriptor(&self) -> TypeDescriptor;

    /// Serializes the records into a byte sequence.
    ///
    /// # Errors
    /// Returns `Error::Encode` if the format library rejects the input.
    fn encode(&self, records: &[Record]) -> Result<Vec<u8>>;

    /// Reconstructs a record set from a byte sequence.
    ///
    /// # Errors
    /// Returns `DecodeError` if the bytes do not match this codec's framing.
    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError>;
}
