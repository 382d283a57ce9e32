//! Reach Subset Library
//!
//! Filters a directory of related hydrological JSON datasets (basins,
//! continents, reach nodes, reaches and sets) down to the records that
//! belong to a caller-supplied list of reach identifiers.
//!
//! This library provides tools for:
//! - Decoding continent and basin codes from reach identifiers
//! - Filtering each dataset by reach, basin or continent membership
//! - Dropping set groups left empty after filtering
//! - Loading inputs and writing pretty-printed subset files

pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod filters;
pub mod io;
pub mod models;
pub mod processor;

pub use config::SubsetConfig;
pub use error::{Result, SubsetError};
pub use models::{DatasetKind, ReachId, RunStats, SubsetRequest};
pub use processor::SubsetProcessor;
