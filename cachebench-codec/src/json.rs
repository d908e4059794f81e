//! Schema-less text codec backed by serde_json.

use cachebench_core::{
    Codec, CodecName, Contract, DecodeError, Error, Record, RecordSet, Result, TypeDescriptor,
};

/// JSON codec. The record set is written as a single UTF-8 array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Record type descriptor for this codec.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("JsonRecord", Contract::Plain);
}

impl Codec for JsonCodec {
    fn name(&self) -> CodecName {
        CodecName::Json
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>> {
        serde_json::to_vec(records).map_err(|e| Error::encode(CodecName::Json, e))
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::malformed(CodecName::Json, e))
    }
}
