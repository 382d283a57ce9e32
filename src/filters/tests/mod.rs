//! Tests for the dataset filters
//!
//! Per-filter behavior plus the properties every filter shares:
//! order preservation, idempotence and subset monotonicity.


use crate::models::{ReachId, SubsetRequest};

/// Build a subset request from raw identifiers
pub fn subset_of(ids: &[u64]) -> SubsetRequest {
    SubsetRequest::new(ids.iter().copied().map(ReachId))
}
