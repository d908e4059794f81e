//! Record and record set types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use uuid::Uuid;

/// A synthetic data unit: three text fields and a unique identifier.
///
/// Fields are private; a record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "propertyA")]
    property_a: String,
    #[serde(rename = "propertyB")]
    property_b: String,
    #[serde(rename = "propertyC")]
    property_c: String,
    id: Uuid,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        property_a: impl Into<String>,
        property_b: impl Into<String>,
        property_c: impl Into<String>,
        id: Uuid,
    ) -> Self {
        Self {
            property_a: property_a.into(),
            property_b: property_b.into(),
            property_c: property_c.into(),
            id,
        }
    }

    /// Returns the first text field.
    #[must_use]
    pub fn property_a(&self) -> &str {
        &self.property_a
    }

    /// Returns the second text field.
    #[must_use]
    pub fn property_b(&self) -> &str {
        &self.property_b
    }

    /// Returns the third text field.
    #[must_use]
    pub fn property_c(&self) -> &str {
        &self.property_c
    }

    /// Returns the unique identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }
}

/// An ordered collection of records used as one benchmark's workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates an empty record set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record set with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the set and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }
}

impl Deref for RecordSet {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordSet[{}]", self.records.len())
    }
}
