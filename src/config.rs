//! Run configuration.
//!
//! Options that shape how a run executes without changing which records
//! survive filtering.

use crate::constants::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
use crate::error::{Result, SubsetError};
use serde::{Deserialize, Serialize};

/// Configuration for a subset run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetConfig {
    /// Run the five dataset stages concurrently
    pub parallel: bool,

    /// Spaces per indent level in output files
    pub indent_width: usize,

    /// Show a progress bar and the final summary
    pub show_progress: bool,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            indent_width: DEFAULT_INDENT_WIDTH,
            show_progress: true,
        }
    }
}

impl SubsetConfig {
    /// Run dataset stages concurrently
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Set the output indent width
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Suppress progress output
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check option ranges
    pub fn validate(&self) -> Result<()> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(SubsetError::configuration(format!(
                "indent width {} exceeds maximum of {}",
                self.indent_width, MAX_INDENT_WIDTH
            )));
        }
        Ok(())
    }
}
