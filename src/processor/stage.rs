//! A single load → filter → write stage.

use crate::error::Result;
use crate::filters::{
    filter_basins, filter_continents, filter_reach_nodes, filter_reaches, filter_sets,
};
use crate::io::{load_json, write_json_pretty};
use crate::models::{DatasetKind, SetGroup, StageStats, SubsetRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Input and output locations for one dataset
#[derive(Debug, Clone)]
pub struct StagePaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl StagePaths {
    pub fn new(dataset: DatasetKind, data_dir: &Path, output_dir: &Path) -> Self {
        Self {
            input: data_dir.join(dataset.input_file()),
            output: output_dir.join(dataset.output_file()),
        }
    }
}

/// Run the stage for `dataset`
pub fn run_stage(
    dataset: DatasetKind,
    subset: &SubsetRequest,
    paths: &StagePaths,
    indent_width: usize,
) -> Result<StageStats> {
    match dataset {
        DatasetKind::Basin => {
            filter_and_write(dataset, subset, paths, indent_width, filter_basins, no_members)
        }
        DatasetKind::Continent => {
            filter_and_write(dataset, subset, paths, indent_width, filter_continents, no_members)
        }
        DatasetKind::ReachNode => {
            filter_and_write(dataset, subset, paths, indent_width, filter_reach_nodes, no_members)
        }
        DatasetKind::Reaches => {
            filter_and_write(dataset, subset, paths, indent_width, filter_reaches, no_members)
        }
        DatasetKind::Sets => {
            filter_and_write(dataset, subset, paths, indent_width, filter_sets, set_members)
        }
    }
}

fn filter_and_write<T>(
    dataset: DatasetKind,
    subset: &SubsetRequest,
    paths: &StagePaths,
    indent_width: usize,
    filter: fn(&SubsetRequest, &[T]) -> Result<Vec<T>>,
    count_members: fn(&[T]) -> usize,
) -> Result<StageStats>
where
    T: DeserializeOwned + Serialize,
{
    let start_time = Instant::now();
    info!("Subsetting {} from {}", dataset, paths.input.display());

    let records: Vec<T> = load_json(&paths.input, dataset.name())?;
    let kept = filter(subset, &records)?;

    if kept.is_empty() && !records.is_empty() {
        warn!("No {} records matched the subset", dataset);
    }

    write_json_pretty(&paths.output, &kept, indent_width)?;

    let stats = StageStats {
        dataset,
        records_in: records.len(),
        records_out: kept.len(),
        members_in: count_members(&records),
        members_out: count_members(&kept),
        output_path: paths.output.clone(),
        elapsed: start_time.elapsed(),
    };
    info!(
        "Kept {} of {} {} records in {}",
        stats.records_out,
        stats.records_in,
        dataset,
        stats.output_path.display()
    );
    Ok(stats)
}

fn no_members<T>(_records: &[T]) -> usize {
    0
}

fn set_members(groups: &[SetGroup]) -> usize {
    groups.iter().map(SetGroup::len).sum()
}
