//! Schema-based binary codec backed by prost.
//!
//! The wire contract, in `.proto` terms:
//!
//! ```proto
//! message ProtoRecord {
//!   optional string property_a = 1;
//!   optional string property_b = 2;
//!   optional string property_c = 3;
//!   optional bytes  id         = 4; // 16 bytes
//! }
//!
//! message ProtoRecordList {
//!   repeated ProtoRecord records = 1;
//! }
//! ```
//!
//! Every field is declared `optional` so that an absent field can be told
//! apart from an empty one; the decoder treats all four as required.

use cachebench_core::{
    Codec, CodecName, Contract, DecodeError, Record, RecordSet, Result, TypeDescriptor,
};
use prost::Message;
use uuid::Uuid;

/// Field number of `propertyA`.
pub const TAG_PROPERTY_A: u32 = 1;
/// Field number of `propertyB`.
pub const TAG_PROPERTY_B: u32 = 2;
/// Field number of `propertyC`.
pub const TAG_PROPERTY_C: u32 = 3;
/// Field number of `id`.
pub const TAG_ID: u32 = 4;

/// Wire representation of a single record.
#[derive(Clone, PartialEq, Message)]
pub struct ProtoRecord {
    /// Field 1.
    #[prost(string, optional, tag = "1")]
    pub property_a: Option<String>,
    /// Field 2.
    #[prost(string, optional, tag = "2")]
    pub property_b: Option<String>,
    /// Field 3.
    #[prost(string, optional, tag = "3")]
    pub property_c: Option<String>,
    /// Field 4, the identifier's 16 raw bytes.
    #[prost(bytes = "vec", optional, tag = "4")]
    pub id: Option<Vec<u8>>,
}

/// Wire representation of a record set.
#[derive(Clone, PartialEq, Message)]
pub struct ProtoRecordList {
    /// Records in order.
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<ProtoRecord>,
}

impl From<&Record> for ProtoRecord {
    fn from(record: &Record) -> Self {
        Self {
            property_a: Some(record.property_a().to_string()),
            property_b: Some(record.property_b().to_string()),
            property_c: Some(record.property_c().to_string()),
            id: Some(record.id().as_bytes().to_vec()),
        }
    }
}

impl ProtoRecord {
    fn into_record(self, index: usize) -> std::result::Result<Record, DecodeError> {
        let missing = |field: &'static str, tag: u32| DecodeError::MissingField { index, field, tag };

        let property_a = self
            .property_a
            .ok_or_else(|| missing("propertyA", TAG_PROPERTY_A))?;
        let property_b = self
            .property_b
            .ok_or_else(|| missing("propertyB", TAG_PROPERTY_B))?;
        let property_c = self
            .property_c
            .ok_or_else(|| missing("propertyC", TAG_PROPERTY_C))?;
        let id = self.id.ok_or_else(|| missing("id", TAG_ID))?;
        let id = Uuid::from_slice(&id).map_err(|e| DecodeError::InvalidId {
            index,
            message: e.to_string(),
        })?;

        Ok(Record::new(property_a, property_b, property_c, id))
    }
}

/// Protocol Buffers codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoCodec;

impl ProtoCodec {
    /// Record type descriptor for this codec.
    pub const DESCRIPTOR: TypeDescriptor =
        TypeDescriptor::new("ProtoRecord", Contract::ProtoContract { fields: 4 });
}

impl Codec for ProtoCodec {
    fn name(&self) -> CodecName {
        CodecName::Proto
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>> {
        let list = ProtoRecordList {
            records: records.iter().map(ProtoRecord::from).collect(),
        };
        Ok(list.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError> {
        let list = ProtoRecordList::decode(bytes)
            .map_err(|e| DecodeError::malformed(CodecName::Proto, e))?;

        list.records
            .into_iter()
            .enumerate()
            .map(|(index, r)| r.into_record(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachebench_core::generate;

    #[test]
    fn test_field_numbers_on_the_wire() {
        let records: RecordSet = vec![Record::new("a", "b", "c", Uuid::nil())].into();
        let bytes = ProtoCodec.encode(&records).unwrap();

        // Outer field 1, length-delimited.
        assert_eq!(bytes[0], (1 << 3) | 2);
        let inner = &bytes[2..];
        assert_eq!(inner[0], ((TAG_PROPERTY_A as u8) << 3) | 2);
        assert_eq!(&inner[1..3], &[1, b'a']);
        assert_eq!(inner[3], ((TAG_PROPERTY_B as u8) << 3) | 2);
        assert_eq!(inner[6], ((TAG_PROPERTY_C as u8) << 3) | 2);
        assert_eq!(inner[9], ((TAG_ID as u8) << 3) | 2);
        assert_eq!(inner[10], 16);
    }

    #[test]
    fn test_round_trip() {
        let records = generate(100).unwrap();
        let bytes = ProtoCodec.encode(&records).unwrap();
        assert_eq!(ProtoCodec.decode(&bytes).unwrap(), records);
    }

    #[test]
    fn test_missing_field_rejected() {
        let list = ProtoRecordList {
            records: vec![ProtoRecord {
                property_a: Some("a".into()),
                property_b: None,
                property_c: Some("c".into()),
                id: Some(Uuid::nil().as_bytes().to_vec()),
            }],
        };
        let err = ProtoCodec.decode(&list.encode_to_vec()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                index: 0,
                field: "propertyB",
                tag: 2
            }
        );
    }

    #[test]
    fn test_missing_id_rejected() {
        let list = ProtoRecordList {
            records: vec![ProtoRecord {
                property_a: Some("a".into()),
                property_b: Some("b".into()),
                property_c: Some("c".into()),
                id: None,
            }],
        };
        assert!(matches!(
            ProtoCodec.decode(&list.encode_to_vec()),
            Err(DecodeError::MissingField { tag: 4, .. })
        ));
    }

    #[test]
    fn test_short_id_rejected() {
        let list = ProtoRecordList {
            records: vec![ProtoRecord {
                property_a: Some("a".into()),
                property_b: Some("b".into()),
                property_c: Some("c".into()),
                id: Some(vec![1, 2, 3]),
            }],
        };
        assert!(matches!(
            ProtoCodec.decode(&list.encode_to_vec()),
            Err(DecodeError::InvalidId { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_wire_data() {
        assert!(matches!(
            ProtoCodec.decode(&[0x0A, 0x05, 0x01]),
            Err(DecodeError::Malformed {
                codec: CodecName::Proto,
                ..
            })
        ));
    }
}
