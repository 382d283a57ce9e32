//! Continent filter.

use super::record_violation;
use crate::error::Result;
use crate::models::{ContinentRecord, DatasetKind, SubsetRequest};
use tracing::debug;

/// Keep records whose continent group shares a code with the requested reaches
pub fn filter_continents(
    subset: &SubsetRequest,
    records: &[ContinentRecord],
) -> Result<Vec<ContinentRecord>> {
    let continent_codes = subset.continent_codes();
    debug!("Filtering continents against codes {:?}", continent_codes);

    let mut kept = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let group = record
            .continent_group()
            .map_err(|reason| record_violation(DatasetKind::Continent, index, reason))?;
        let intersects = group.iter().any(|code| {
            u64::try_from(*code).is_ok_and(|code| continent_codes.contains(&code))
        });
        if intersects {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}
