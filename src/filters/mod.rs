//! Dataset filters.
//!
//! One pure function per dataset. Each takes the subset request and the
//! loaded records and returns a new collection holding the surviving
//! records in their original order. Every record is validated, including
//! records that end up dropped, so a schema violation anywhere in a
//! dataset aborts that filter.

pub mod basin;
pub mod continent;
pub mod reach_node;
pub mod reaches;
pub mod sets;

#[cfg(test)]
pub mod tests;

pub use basin::filter_basins;
pub use continent::filter_continents;
pub use reach_node::filter_reach_nodes;
pub use reaches::filter_reaches;
pub use sets::filter_sets;

use crate::error::SubsetError;
use crate::models::DatasetKind;

/// Attach dataset and record position to a field-level failure
pub(crate) fn record_violation(dataset: DatasetKind, index: usize, reason: String) -> SubsetError {
    SubsetError::schema_violation(dataset.name(), format!("record {}", index), reason)
}
