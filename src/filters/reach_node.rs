//! Reach-node filter: records keyed by their first element.

use super::record_violation;
use crate::error::Result;
use crate::models::{DatasetKind, ReachNodeRecord, SubsetRequest};

/// Keep records whose leading reach identifier was requested
pub fn filter_reach_nodes(
    subset: &SubsetRequest,
    records: &[ReachNodeRecord],
) -> Result<Vec<ReachNodeRecord>> {
    let mut kept = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let reach_id = record
            .reach_id()
            .map_err(|reason| record_violation(DatasetKind::ReachNode, index, reason))?;
        if subset.contains(reach_id) {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}
