//! Application constants for the reach subsetter
//!
//! File names for the five datasets, identifier decoding widths and
//! output formatting defaults.

// =============================================================================
// Dataset File Names
// =============================================================================

pub const BASIN_INPUT_FILE: &str = "basin.json";
pub const CONTINENT_INPUT_FILE: &str = "continent.json";
pub const REACH_NODE_INPUT_FILE: &str = "reach_node.json";
pub const REACHES_INPUT_FILE: &str = "reaches.json";
pub const SETS_INPUT_FILE: &str = "sets.json";

pub const BASIN_OUTPUT_FILE: &str = "basin-subset.json";
pub const CONTINENT_OUTPUT_FILE: &str = "continent-subset.json";
pub const REACH_NODE_OUTPUT_FILE: &str = "reach_node-subset.json";
pub const REACHES_OUTPUT_FILE: &str = "reaches-subset.json";
pub const SETS_OUTPUT_FILE: &str = "sets-subset.json";

// =============================================================================
// Identifier Structure
// =============================================================================

/// Leading characters of a reach identifier that name its continent
pub const CONTINENT_CODE_WIDTH: usize = 1;

/// Leading characters of a reach identifier that name its basin
pub const BASIN_CODE_WIDTH: usize = 6;

/// Record field holding a basin identifier
pub const BASIN_ID_FIELD: &str = "basin_id";

/// Record field holding a reach identifier
pub const REACH_ID_FIELD: &str = "reach_id";

// =============================================================================
// Output Formatting
// =============================================================================

/// Indent width for pretty-printed output
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Largest indent width accepted from the command line
pub const MAX_INDENT_WIDTH: usize = 16;

/// Log target used for the default `EnvFilter` directive
pub const LOG_TARGET: &str = "reach_subset";
