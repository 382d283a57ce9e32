//! Continent and basin codes derived from reach identifiers.
//!
//! Both codes come from truncating the decimal string of the identifier,
//! not from arithmetic on its digits. An identifier shorter than the
//! basin width decodes to its own value.

use crate::constants::{BASIN_CODE_WIDTH, CONTINENT_CODE_WIDTH};
use crate::models::ReachId;

/// Continent code: the leading digit of the identifier
pub fn continent_code(id: ReachId) -> u64 {
    leading_value(id, CONTINENT_CODE_WIDTH)
}

/// Basin code: the leading six characters of the identifier
pub fn basin_code(id: ReachId) -> u64 {
    leading_value(id, BASIN_CODE_WIDTH)
}

fn leading_value(id: ReachId, width: usize) -> u64 {
    let digits = id.0.to_string();
    let end = digits.len().min(width);
    // Every prefix of a rendered u64 is a non-empty run of ASCII digits
    digits[..end].parse().unwrap_or(id.0)
}
