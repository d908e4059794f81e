//! Structured markup codec backed by quick-xml.
//!
//! Each record becomes an `XmlRecord` element. The identifier is written as
//! the `id` attribute and the text fields as child elements:
//!
//! ```xml
//! <ArrayOfXmlRecord>
//!   <XmlRecord id="0f8fad5b-d9cb-469f-a165-70867728950e">
//!     <propertyA>PropertyA1</propertyA>
//!     <propertyB>PropertyB1</propertyB>
//!     <propertyC>PropertyC1</propertyC>
//!   </XmlRecord>
//! </ArrayOfXmlRecord>
//! ```

use cachebench_core::{
    Codec, CodecName, Contract, DecodeError, Error, Record, RecordSet, Result, TypeDescriptor,
};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "ArrayOfXmlRecord";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "ArrayOfXmlRecord")]
struct XmlRecordList {
    #[serde(rename = "XmlRecord", default)]
    records: Vec<XmlRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlRecord {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "propertyA")]
    property_a: String,
    #[serde(rename = "propertyB")]
    property_b: String,
    #[serde(rename = "propertyC")]
    property_c: String,
}

impl From<&Record> for XmlRecord {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id().hyphenated().to_string(),
            property_a: record.property_a().to_string(),
            property_b: record.property_b().to_string(),
            property_c: record.property_c().to_string(),
        }
    }
}

/// XML codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl XmlCodec {
    /// Record type descriptor for this codec.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("XmlRecord", Contract::XmlMapped);
}

impl Codec for XmlCodec {
    fn name(&self) -> CodecName {
        CodecName::Xml
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>> {
        let list = XmlRecordList {
            records: records.iter().map(XmlRecord::from).collect(),
        };
        let text = quick_xml::se::to_string(&list).map_err(|e| Error::encode(CodecName::Xml, e))?;
        Ok(text.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<RecordSet, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        check_root(text)?;

        let list: XmlRecordList =
            quick_xml::de::from_str(text).map_err(|e| DecodeError::malformed(CodecName::Xml, e))?;

        list.records
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                let id = Uuid::parse_str(&r.id).map_err(|e| DecodeError::InvalidId {
                    index,
                    message: e.to_string(),
                })?;
                Ok(Record::new(r.property_a, r.property_b, r.property_c, id))
            })
            .collect()
    }
}

/// Verifies the document root before handing the text to serde, which
/// does not check element names at the top level.
fn check_root(text: &str) -> std::result::Result<(), DecodeError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                if name != ROOT_ELEMENT {
                    return Err(DecodeError::TypeMismatch {
                        expected: ROOT_ELEMENT.to_string(),
                        actual: name,
                    });
                }
                return Ok(());
            }
            Ok(Event::Eof) => {
                return Err(DecodeError::malformed(CodecName::Xml, "no root element"));
            }
            Err(e) => return Err(DecodeError::malformed(CodecName::Xml, e)),
            _ => {}
        }
    }
}
