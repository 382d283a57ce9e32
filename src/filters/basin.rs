//! Basin filter: keep basins named by the leading digits of a requested reach.

use super::record_violation;
use crate::error::Result;
use crate::models::{BasinRecord, DatasetKind, SubsetRequest};
use tracing::debug;

/// Keep records whose `basin_id` is the basin code of some requested reach
pub fn filter_basins(subset: &SubsetRequest, records: &[BasinRecord]) -> Result<Vec<BasinRecord>> {
    let basin_codes = subset.basin_codes();
    debug!("Filtering basins against {} basin codes", basin_codes.len());

    let mut kept = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let basin_id = record
            .basin_id()
            .map_err(|reason| record_violation(DatasetKind::Basin, index, reason))?;
        if basin_codes.contains(&basin_id) {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}
