//! Record type descriptors and the format selector.
//!
//! Each codec serializes its own record shape. A [`TypeDescriptor`] names
//! that shape and carries a [`Contract`] tag fixed at compile time, which
//! [`recommend_codec`] inspects to pick a format.

use crate::codec::CodecName;

/// Serialization contract a record type opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contract {
    /// No contract; any self-describing format works.
    Plain,
    /// Marked for generic object-graph serialization.
    Serializable,
    /// Fields mapped onto XML elements and attributes.
    XmlMapped,
    /// Fields bound to fixed protobuf field numbers.
    ProtoContract {
        /// Number of field numbers declared by the contract.
        fields: u32,
    },
}

/// Describes the record type carried by a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Record type name.
    pub name: &'static str,
    /// Contract tag.
    pub contract: Contract,
}

impl TypeDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(name: &'static str, contract: Contract) -> Self {
        Self { name, contract }
    }

    /// Returns true if the type carries the schema-based binary contract.
    #[must_use]
    pub const fn has_proto_contract(&self) -> bool {
        matches!(self.contract, Contract::ProtoContract { .. })
    }
}

/// Recommends a codec for a record type.
///
/// Types carrying the schema-based binary contract get [`CodecName::Proto`];
/// everything else gets [`CodecName::Json`].
#[must_use]
pub const fn recommend_codec(descriptor: &TypeDescriptor) -> CodecName {
    if descriptor.has_proto_contract() {
        CodecName::Proto
    } else {
        CodecName::Json
    }
}
