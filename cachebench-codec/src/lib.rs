//! # cachebench Codec
//!
//! Codec adapters for the four benchmarked serialization formats.
//!
//! Every adapter implements [`cachebench_core::Codec`] and delegates the
//! actual format work to a library crate:
//! - [`BinaryCodec`] - bincode payload behind a typed envelope
//! - [`XmlCodec`] - quick-xml serde mapping, `id` as an attribute
//! - [`JsonCodec`] - serde_json text blob
//! - [`ProtoCodec`] - prost message with fixed field numbers

pub mod binary;
pub mod json;
pub mod proto;
pub mod xml;

pub use binary::BinaryCodec;
pub use json::JsonCodec;
pub use proto::ProtoCodec;
pub use xml::XmlCodec;

use cachebench_core::{Codec, CodecName};

/// Returns every codec in benchmark order.
#[must_use]
pub fn all_codecs() -> [&'static dyn Codec; 4] {
    [&BinaryCodec, &XmlCodec, &JsonCodec, &ProtoCodec]
}

/// Returns the codec for a format identifier.
#[must_use]
pub fn codec_for(name: CodecName) -> &'static dyn Codec {
    match name {
        CodecName::Binary => &BinaryCodec,
        CodecName::Xml => &XmlCodec,
        CodecName::Json => &JsonCodec,
        CodecName::Proto => &ProtoCodec,
    }
}
