//! Synthetic workload generation.

use crate::error::{Error, Result};
use crate::record::{Record, RecordSet};
use uuid::Uuid;

/// Generates `count` records.
///
/// Record `i` (1-indexed) carries `"PropertyA{i}"`, `"PropertyB{i}"`,
/// `"PropertyC{i}"` and a fresh random v4 identifier.
///
/// # Errors
/// Returns [`Error::EmptyWorkload`] if `count` is zero.
pub fn generate(count: usize) -> Result<RecordSet> {
    if count == 0 {
        return Err(Error::EmptyWorkload);
    }

    Ok((1..=count)
        .map(|i| {
            Record::new(
                format!("PropertyA{i}"),
                format!("PropertyB{i}"),
                format!("PropertyC{i}"),
                Uuid::new_v4(),
            )
        })
        .collect())
}
