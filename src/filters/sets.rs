//! Set filter.
//!
//! Sets are filtered at two levels: members outside the subset are
//! removed, then groups left without members are removed. The surviving
//! groups may no longer describe a meaningful grouping of reaches; they
//! are written as-is.
//!
//! Members are matched on their stored `reach_id`: a member whose
//! identifier is a numeric string is validated but never kept.

use crate::error::{Result, SubsetError};
use crate::models::{DatasetKind, SetGroup, SubsetRequest};
use tracing::trace;

/// Keep requested members of each group and drop groups left empty
pub fn filter_sets(subset: &SubsetRequest, groups: &[SetGroup]) -> Result<Vec<SetGroup>> {
    let mut kept = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        let mut members = Vec::new();
        for (member_index, member) in group.members().iter().enumerate() {
            let reach_id = member.reach_id().map_err(|reason| {
                SubsetError::schema_violation(
                    DatasetKind::Sets.name(),
                    format!("set {} member {}", group_index, member_index),
                    reason,
                )
            })?;
            if subset.contains(reach_id) && member.has_numeric_reach_id() {
                members.push(member.clone());
            }
        }

        let filtered = SetGroup(members);
        if filtered.is_empty() {
            trace!("Dropping set {}: no requested members", group_index);
        } else {
            kept.push(filtered);
        }
    }
    Ok(kept)
}
