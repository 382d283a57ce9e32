//! Core data structures and types for reach subsetting.
//!
//! Defines the dataset kinds, reach identifiers, the subset request and
//! the record wrappers each filter reads, plus the statistics reported
//! after a run.
//!
//! Records wrap the loaded `serde_json::Value` transparently. Filters
//! only read the fields they need, so every other field is written back
//! exactly as it was loaded, in its original key order.

use crate::constants::{
    BASIN_ID_FIELD, BASIN_INPUT_FILE, BASIN_OUTPUT_FILE, CONTINENT_INPUT_FILE,
    CONTINENT_OUTPUT_FILE, REACH_ID_FIELD, REACH_NODE_INPUT_FILE, REACH_NODE_OUTPUT_FILE,
    REACHES_INPUT_FILE, REACHES_OUTPUT_FILE, SETS_INPUT_FILE, SETS_OUTPUT_FILE,
};
use crate::decoder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The five datasets a run subsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Basin,
    Continent,
    ReachNode,
    Reaches,
    Sets,
}

impl DatasetKind {
    /// All datasets in processing order
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::Basin,
        DatasetKind::Continent,
        DatasetKind::ReachNode,
        DatasetKind::Reaches,
        DatasetKind::Sets,
    ];

    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Basin => "basin",
            DatasetKind::Continent => "continent",
            DatasetKind::ReachNode => "reach_node",
            DatasetKind::Reaches => "reaches",
            DatasetKind::Sets => "sets",
        }
    }

    /// File name of this dataset inside the data directory
    pub fn input_file(&self) -> &'static str {
        match self {
            DatasetKind::Basin => BASIN_INPUT_FILE,
            DatasetKind::Continent => CONTINENT_INPUT_FILE,
            DatasetKind::ReachNode => REACH_NODE_INPUT_FILE,
            DatasetKind::Reaches => REACHES_INPUT_FILE,
            DatasetKind::Sets => SETS_INPUT_FILE,
        }
    }

    /// File name of the filtered dataset inside the output directory
    pub fn output_file(&self) -> &'static str {
        match self {
            DatasetKind::Basin => BASIN_OUTPUT_FILE,
            DatasetKind::Continent => CONTINENT_OUTPUT_FILE,
            DatasetKind::ReachNode => REACH_NODE_OUTPUT_FILE,
            DatasetKind::Reaches => REACHES_OUTPUT_FILE,
            DatasetKind::Sets => SETS_OUTPUT_FILE,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reach identifier
///
/// The decimal form carries structure: the first digit is the continent
/// code and the first six characters are the basin code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReachId(pub u64);

impl ReachId {
    /// Coerce a JSON value into a reach identifier.
    ///
    /// Accepts non-negative integers, strings holding a non-negative
    /// integer (surrounding whitespace ignored) and finite non-negative
    /// floats, which are truncated toward zero.
    pub fn coerce(value: &Value) -> Result<Self, String> {
        match value {
            Value::Number(number) => {
                if let Some(id) = number.as_u64() {
                    return Ok(ReachId(id));
                }
                if number.as_i64().is_some() {
                    return Err(format!("reach identifier {} is negative", number));
                }
                match number.as_f64() {
                    Some(float) if float.is_finite() && float >= 0.0 && float < u64::MAX as f64 => {
                        Ok(ReachId(float.trunc() as u64))
                    }
                    _ => Err(format!("reach identifier {} is not a valid integer", number)),
                }
            }
            Value::String(text) => text
                .trim()
                .parse::<u64>()
                .map(ReachId)
                .map_err(|_| format!("reach identifier {:?} is not an integer string", text)),
            other => Err(format!(
                "reach identifier must be an integer or numeric string, found {}",
                json_type_name(other)
            )),
        }
    }
}

impl fmt::Display for ReachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The reach identifiers that decide which records survive a run
///
/// Continent and basin codes are derived once at construction so the
/// filters only perform set lookups.
#[derive(Debug, Clone, Default)]
pub struct SubsetRequest {
    reaches: HashSet<ReachId>,
    basin_codes: HashSet<u64>,
    continent_codes: HashSet<u64>,
    requested: usize,
}

impl SubsetRequest {
    /// Build a request from identifiers. Duplicates are allowed.
    pub fn new(ids: impl IntoIterator<Item = ReachId>) -> Self {
        let mut request = Self::default();
        for id in ids {
            request.requested += 1;
            request.basin_codes.insert(decoder::basin_code(id));
            request.continent_codes.insert(decoder::continent_code(id));
            request.reaches.insert(id);
        }
        request
    }

    /// Build a request from the JSON values of a subset file
    pub fn from_values(values: &[Value]) -> Result<Self, (usize, String)> {
        let ids = values
            .iter()
            .enumerate()
            .map(|(index, value)| ReachId::coerce(value).map_err(|reason| (index, reason)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(ids))
    }

    pub fn contains(&self, id: ReachId) -> bool {
        self.reaches.contains(&id)
    }

    /// Basin codes derived from every requested reach
    pub fn basin_codes(&self) -> &HashSet<u64> {
        &self.basin_codes
    }

    /// Continent codes derived from every requested reach
    pub fn continent_codes(&self) -> &HashSet<u64> {
        &self.continent_codes
    }

    /// Number of distinct reach identifiers
    pub fn len(&self) -> usize {
        self.reaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reaches.is_empty()
    }

    /// Number of identifiers supplied, duplicates included
    pub fn requested(&self) -> usize {
        self.requested
    }
}

/// A record from `basin.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasinRecord(pub Value);

impl BasinRecord {
    pub fn basin_id(&self) -> Result<u64, String> {
        let value = object_field(&self.0, BASIN_ID_FIELD)?;
        value.as_u64().ok_or_else(|| {
            format!(
                "`{}` must be a non-negative integer, found {}",
                BASIN_ID_FIELD, value
            )
        })
    }
}

/// A record from `continent.json`: a mapping whose first value lists
/// the continent codes of the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinentRecord(pub Value);

impl ContinentRecord {
    pub fn continent_group(&self) -> Result<Vec<i64>, String> {
        let object = self
            .0
            .as_object()
            .ok_or_else(|| format!("expected an object, found {}", json_type_name(&self.0)))?;
        let (key, group) = object
            .iter()
            .next()
            .ok_or_else(|| "continent record has no entries".to_string())?;
        let codes = group.as_array().ok_or_else(|| {
            format!(
                "continent group `{}` must be an array, found {}",
                key,
                json_type_name(group)
            )
        })?;
        codes
            .iter()
            .map(|code| {
                code.as_i64()
                    .ok_or_else(|| format!("continent code {} in `{}` is not an integer", code, key))
            })
            .collect()
    }
}

/// A record from `reach_node.json`: a sequence led by a reach identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReachNodeRecord(pub Value);

impl ReachNodeRecord {
    pub fn reach_id(&self) -> Result<ReachId, String> {
        let items = self
            .0
            .as_array()
            .ok_or_else(|| format!("expected an array, found {}", json_type_name(&self.0)))?;
        let first = items
            .first()
            .ok_or_else(|| "reach node record is empty".to_string())?;
        ReachId::coerce(first)
    }
}

/// A record from `reaches.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReachRecord(pub Value);

impl ReachRecord {
    pub fn reach_id(&self) -> Result<ReachId, String> {
        ReachId::coerce(object_field(&self.0, REACH_ID_FIELD)?)
    }
}

/// One member of a set group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetMember(pub Value);

impl SetMember {
    pub fn reach_id(&self) -> Result<ReachId, String> {
        ReachId::coerce(object_field(&self.0, REACH_ID_FIELD)?)
    }

    /// True when `reach_id` is stored as a JSON number with an integral value.
    ///
    /// Set members are matched on their stored value, so a member whose
    /// identifier is written as a string never matches a requested reach.
    pub fn has_numeric_reach_id(&self) -> bool {
        match object_field(&self.0, REACH_ID_FIELD) {
            Ok(Value::Number(number)) => {
                number.as_u64().is_some()
                    || number.as_f64().is_some_and(|float| float.fract() == 0.0)
            }
            _ => false,
        }
    }
}

/// A group of reaches from `sets.json`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetGroup(pub Vec<SetMember>);

impl SetGroup {
    pub fn members(&self) -> &[SetMember] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn object_field<'a>(value: &'a Value, field: &str) -> Result<&'a Value, String> {
    let object = value
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", json_type_name(value)))?;
    object
        .get(field)
        .ok_or_else(|| format!("missing required field `{}`", field))
}

/// Human-readable JSON type name for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Outcome of one load → filter → write stage
#[derive(Debug, Clone)]
pub struct StageStats {
    pub dataset: DatasetKind,
    pub records_in: usize,
    pub records_out: usize,
    /// Set members before and after filtering; zero for other datasets
    pub members_in: usize,
    pub members_out: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

/// Statistics for a complete run
#[derive(Debug, Default)]
pub struct RunStats {
    pub subset_size: usize,
    pub stages: Vec<StageStats>,
    pub processing_time: Duration,
}

impl RunStats {
    pub fn records_written(&self) -> usize {
        self.stages.iter().map(|stage| stage.records_out).sum()
    }

    pub fn stage(&self, dataset: DatasetKind) -> Option<&StageStats> {
        self.stages.iter().find(|stage| stage.dataset == dataset)
    }
}
