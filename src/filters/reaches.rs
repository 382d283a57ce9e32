//! Reach filter.

use super::record_violation;
use crate::error::Result;
use crate::models::{DatasetKind, ReachRecord, SubsetRequest};

/// Keep records whose `reach_id` was requested
pub fn filter_reaches(subset: &SubsetRequest, records: &[ReachRecord]) -> Result<Vec<ReachRecord>> {
    let mut kept = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let reach_id = record
            .reach_id()
            .map_err(|reason| record_violation(DatasetKind::Reaches, index, reason))?;
        if subset.contains(reach_id) {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}
