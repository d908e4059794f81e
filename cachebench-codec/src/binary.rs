//! Generic object-graph binary codec.
//!
//! The payload is a bincode encoding of the whole record set, preceded by
//! an envelope carrying type metadata:
//!
//! ```text
//! +--------+---------+----------+-----------+-----------------+
//! | magic  | version | name len | type name | bincode payload |
//! | 4 B    | u16 LE  | u16 LE   | name len  | rest            |
//! +--------+---------+----------+-----------+-----------------+
//! ```

use bytes::{Buf, BufMut};
use cachebench_core::{
    Codec, CodecName, Contract, DecodeError, Error, Record, RecordSet, Result, TypeDescriptor,
};

/// Envelope magic bytes.
pub const MAGIC: [u8; 4] = *b"CBIN";

/// Envelope format version.
pub const FORMAT_VERSION: u16 = 1;

/// Record type name written into the envelope.
pub const TYPE_NAME: &str = "cachebench.BinaryRecord";

/// Size of the fixed part of the envelope (magic, version, name length).
const FIXED_HEADER_LENGTH: usize = 8;

/// Binary codec backed by bincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl BinaryCodec {
    /// Record type descriptor for this codec.
    pub const DESCRIPTOR: TypeDescriptor =
        TypeDescriptor::new("BinaryRecord", Contract::Serializable);
}

impl Codec for BinaryCodec {
    fn name(&self) -> CodecName {
        CodecName::Binary
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>> {
        let payload_len = bincode::serialized_size(records)
            .map_err(|e| Error::encode(CodecName::Binary, e))? as usize;

        let mut out = Vec::with_capacity(FIXED_HEADER_LENGTH + TYPE_NAME.len() + payload_len);
        out.put_slice(&MAGIC);
        out.put_u16_le(FORMAT_VERSION);
        out.put_u16_le(TYPE_NAME.len() as u16);
        out.put_slice(TYPE_NAME.as_bytes());

        bincode::serialize_into(&mut out, records)
            .map_err(|e| Error::encode(CodecName::Binary, e))?;

        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError> {
        ensure_remaining(bytes, 0, FIXED_HEADER_LENGTH)?;
        let mut buf = bytes;

        let mut magic = [0u8; 4];
        buf.copy_to_slice(&mut magic);
        if magic != MAGIC {
            return Err(DecodeError::BadMagic {
                expected: MAGIC,
                actual: magic,
            });
        }

        let version = buf.get_u16_le();
        if version != FORMAT_VERSION {
            return Err(DecodeError::VersionMismatch {
                expected: FORMAT_VERSION,
                actual: version,
            });
        }

        let name_len = buf.get_u16_le() as usize;
        ensure_remaining(bytes, FIXED_HEADER_LENGTH, name_len)?;
        let type_name = std::str::from_utf8(&buf[..name_len]).map_err(|e| DecodeError::Utf8 {
            offset: FIXED_HEADER_LENGTH + e.valid_up_to(),
        })?;
        if type_name != TYPE_NAME {
            return Err(DecodeError::TypeMismatch {
                expected: TYPE_NAME.to_string(),
                actual: type_name.to_string(),
            });
        }
        buf.advance(name_len);

        let records: Vec<Record> =
            bincode::deserialize(buf).map_err(|e| DecodeError::malformed(CodecName::Binary, e))?;
        Ok(records.into())
    }
}

fn ensure_remaining(
    bytes: &[u8],
    offset: usize,
    count: usize,
) -> std::result::Result<(), DecodeError> {
    let required = offset + count;
    if bytes.len() < required {
        return Err(DecodeError::Truncated {
            required,
            available: bytes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachebench_core::generate;

    #[test]
    fn test_envelope_header() {
        let records = generate(3).unwrap();
        let bytes = BinaryCodec.encode(&records).unwrap();

        assert_eq!(&bytes[0..4], b"CBIN");
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), FORMAT_VERSION);
        let name_len = u16::from_le_bytes([bytes[6], bytes[7]]) as usize;
        assert_eq!(&bytes[8..8 + name_len], TYPE_NAME.as_bytes());
    }

    #[test]
    fn test_round_trip() {
        let records = generate(100).unwrap();
        let bytes = BinaryCodec.encode(&records).unwrap();
        assert_eq!(BinaryCodec.decode(&bytes).unwrap(), records);
    }

    #[test]
    fn test_truncated_header() {
        let err = BinaryCodec.decode(b"CBI").unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                required: 8,
                available: 3
            }
        );
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = BinaryCodec.encode(&generate(1).unwrap()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            BinaryCodec.decode(&bytes),
            Err(DecodeError::BadMagic { .. })
        ));
    }

    #[test]
    fn test_version_mismatch() {
        let mut bytes = BinaryCodec.encode(&generate(1).unwrap()).unwrap();
        bytes[4..6].copy_from_slice(&2u16.to_le_bytes());
        assert_eq!(
            BinaryCodec.decode(&bytes).unwrap_err(),
            DecodeError::VersionMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let mut bytes = BinaryCodec.encode(&generate(1).unwrap()).unwrap();
        // Overwrite the last byte of the type name.
        let last = FIXED_HEADER_LENGTH + TYPE_NAME.len() - 1;
        bytes[last] = b'X';
        assert!(matches!(
            BinaryCodec.decode(&bytes),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let bytes = BinaryCodec.encode(&generate(5).unwrap()).unwrap();
        let cut = &bytes[..bytes.len() - 10];
        assert!(matches!(
            BinaryCodec.decode(cut),
            Err(DecodeError::Malformed {
                codec: CodecName::Binary,
                ..
            })
        ));
    }
}
