//! Subset orchestration.
//!
//! Loads the subset list once, then runs one load → filter → write stage
//! per dataset. Stages run in dataset order by default, or all at once
//! when parallel mode is enabled. The first failing stage ends the run;
//! files written by stages that already finished stay on disk.
//!
//! Cancellation is checked before each stage starts. A stage that is
//! already running finishes writing its output, so an interrupted run
//! never leaves a partially written file behind.

pub mod report;
pub mod stage;

#[cfg(test)]
pub mod tests;

use self::stage::{StagePaths, run_stage};

use crate::config::SubsetConfig;
use crate::error::{Result, SubsetError};
use crate::io::load_json;
use crate::models::{DatasetKind, RunStats, StageStats, SubsetRequest};

use colored::*;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{self, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Runs a complete subset over a data directory
#[derive(Debug)]
pub struct SubsetProcessor {
    subset_path: PathBuf,
    data_dir: PathBuf,
    output_dir: PathBuf,
    config: SubsetConfig,
    cancellation_token: CancellationToken,
}

impl SubsetProcessor {
    /// Create a new subset processor
    pub fn new(subset_path: PathBuf, data_dir: PathBuf, output_dir: PathBuf) -> Result<Self> {
        if !data_dir.exists() {
            return Err(SubsetError::InputNotFound { path: data_dir });
        }
        if !data_dir.is_dir() {
            return Err(SubsetError::configuration(format!(
                "data directory {} is not a directory",
                data_dir.display()
            )));
        }

        Ok(Self {
            subset_path,
            data_dir,
            output_dir,
            config: SubsetConfig::default(),
            cancellation_token: CancellationToken::new(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: SubsetConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop starting new stages once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<RunStats> {
        self.config.validate()?;
        let start_time = Instant::now();

        if self.config.show_progress {
            println!("{}", "Starting reach subset".bright_green().bold());
            println!("  {} {}", "Subset:".bright_cyan(), self.subset_path.display());
            println!("  {} {}", "Data:".bright_cyan(), self.data_dir.display());
            println!("  {} {}", "Output:".bright_cyan(), self.output_dir.display());
        }

        let subset = Arc::new(self.load_subset()?);
        info!(
            "Loaded {} reach identifiers ({} distinct)",
            subset.requested(),
            subset.len()
        );
        if subset.is_empty() {
            warn!("Subset list is empty, every output will be empty");
        }
        debug!(
            "Derived {} basin codes and {} continent codes",
            subset.basin_codes().len(),
            subset.continent_codes().len()
        );

        let progress = self.progress_bar();
        let stages = if self.config.parallel {
            self.run_parallel(&subset, &progress).await
        } else {
            self.run_sequential(&subset, &progress).await
        };

        let stages = match stages {
            Ok(stages) => {
                progress.finish_with_message("Subset complete");
                stages
            }
            Err(error) => {
                progress.abandon_with_message("Subset failed");
                return Err(error);
            }
        };

        let stats = RunStats {
            subset_size: subset.len(),
            stages,
            processing_time: start_time.elapsed(),
        };

        if self.config.show_progress {
            report::print_summary(&stats);
        }
        Ok(stats)
    }

    /// Load and decode the subset list
    pub fn load_subset(&self) -> Result<SubsetRequest> {
        let values: Vec<Value> = load_json(&self.subset_path, "subset")?;
        SubsetRequest::from_values(&values).map_err(|(index, reason)| {
            SubsetError::schema_violation("subset", format!("entry {}", index), reason)
        })
    }

    /// Run stages one after another, stopping at the first failure
    async fn run_sequential(
        &self,
        subset: &Arc<SubsetRequest>,
        progress: &ProgressBar,
    ) -> Result<Vec<StageStats>> {
        let mut stages = Vec::with_capacity(DatasetKind::ALL.len());
        for dataset in DatasetKind::ALL {
            let stats = self.spawn_stage(dataset, subset, progress).await;
            stages.push(join_stage(dataset, stats)?);
        }
        Ok(stages)
    }

    /// Run every stage concurrently and report the first failure in dataset order
    async fn run_parallel(
        &self,
        subset: &Arc<SubsetRequest>,
        progress: &ProgressBar,
    ) -> Result<Vec<StageStats>> {
        let handles: Vec<_> = DatasetKind::ALL
            .iter()
            .map(|&dataset| self.spawn_stage(dataset, subset, progress))
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(DatasetKind::ALL)
            .map(|(stats, dataset)| join_stage(dataset, stats))
            .collect()
    }

    fn spawn_stage(
        &self,
        dataset: DatasetKind,
        subset: &Arc<SubsetRequest>,
        progress: &ProgressBar,
    ) -> JoinHandle<Result<StageStats>> {
        let paths = StagePaths::new(dataset, &self.data_dir, &self.output_dir);
        let subset = Arc::clone(subset);
        let progress = progress.clone();
        let indent_width = self.config.indent_width;
        let cancellation_token = self.cancellation_token.clone();

        task::spawn_blocking(move || {
            if cancellation_token.is_cancelled() {
                return Err(SubsetError::processing_interrupted(format!(
                    "cancelled before the {} stage started",
                    dataset
                )));
            }
            let stats = run_stage(dataset, &subset, &paths, indent_width)?;
            progress.set_message(dataset.output_file());
            progress.inc(1);
            Ok(stats)
        })
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(DatasetKind::ALL.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            progress.set_style(style.progress_chars("=> "));
        }
        progress
    }
}

fn join_stage(
    dataset: DatasetKind,
    joined: std::result::Result<Result<StageStats>, task::JoinError>,
) -> Result<StageStats> {
    joined.map_err(|e| SubsetError::TaskFailed {
        reason: format!("{} stage did not complete: {}", dataset, e),
    })?
}
