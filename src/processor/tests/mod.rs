//! Integration tests for the processor module
//!
//! Tests the complete subset pipeline against small data directories
//! built in temporary folders.

pub mod basic_processing;

use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch layout for one run: a subset file, a data directory and an output directory
pub struct TestLayout {
    pub temp_dir: TempDir,
    pub subset_path: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestLayout {
    pub fn new(subset: Value) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let subset_path = temp_dir.path().join("reach-subset.json");
        let data_dir = temp_dir.path().join("json-data");
        let output_dir = temp_dir.path().join("subset-out");
        fs::create_dir_all(&data_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();
        fs::write(&subset_path, subset.to_string()).unwrap();

        Self {
            temp_dir,
            subset_path,
            data_dir,
            output_dir,
        }
    }

    /// Layout with all five datasets populated
    pub fn with_sample_data(subset: Value) -> Self {
        let layout = Self::new(subset);
        for (name, contents) in sample_datasets() {
            layout.write_input(name, &contents.to_string());
        }
        layout
    }

    pub fn write_input(&self, name: &str, contents: &str) {
        fs::write(self.data_dir.join(name), contents).unwrap();
    }

    pub fn remove_input(&self, name: &str) {
        fs::remove_file(self.data_dir.join(name)).unwrap();
    }

    pub fn read_output(&self, name: &str) -> Value {
        let text = fs::read_to_string(self.output_dir.join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    pub fn output_exists(&self, name: &str) -> bool {
        self.output_dir.join(name).exists()
    }
}

/// Five small datasets around reaches 12300001 and 12300002 (continent 1, basin 123000)
pub fn sample_datasets() -> Vec<(&'static str, Value)> {
    vec![
        (
            "basin.json",
            json!([
                {"basin_id": 123000, "name": "first"},
                {"basin_id": 456000, "name": "second"},
                {"basin_id": 741001, "name": "third"}
            ]),
        ),
        (
            "continent.json",
            json!([
                {"AF": [1]},
                {"EU": [2]},
                {"NA": [7, 8, 9]}
            ]),
        ),
        (
            "reach_node.json",
            json!([
                [12300001, [1230000100011u64, 1230000100021u64]],
                ["99999999", [9999999900011u64]],
                ["12300002", [1230000200011u64]]
            ]),
        ),
        (
            "reaches.json",
            json!([
                {"reach_id": 12300001, "x": 1.5},
                {"reach_id": 99999999, "x": 2.5}
            ]),
        ),
        (
            "sets.json",
            json!([
                [{"reach_id": 99999999}],
                [{"reach_id": 12300002}, {"reach_id": 45600001}, {"reach_id": 12300001}]
            ]),
        ),
    ]
}
