//! Basic processing tests

use super::TestLayout;
use crate::config::SubsetConfig;
use crate::models::DatasetKind;
use crate::processor::SubsetProcessor;
use serde_json::json;

fn processor_for(layout: &TestLayout) -> SubsetProcessor {
    SubsetProcessor::new(
        layout.subset_path.clone(),
        layout.data_dir.clone(),
        layout.output_dir.clone(),
    )
    .unwrap()
    .with_config(SubsetConfig::default().without_progress())
}

#[tokio::test]
async fn test_all_five_outputs_are_written() {
    let layout = TestLayout::with_sample_data(json!([12300001, 12300002]));

    let stats = processor_for(&layout).process().await.unwrap();

    assert_eq!(stats.subset_size, 2);
    assert_eq!(stats.stages.len(), 5);
    for dataset in DatasetKind::ALL {
        assert!(layout.output_exists(dataset.output_file()));
    }

    assert_eq!(
        layout.read_output("basin-subset.json"),
        json!([{"basin_id": 123000, "name": "first"}])
    );
    assert_eq!(layout.read_output("continent-subset.json"), json!([{"AF": [1]}]));
    assert_eq!(
        layout.read_output("reach_node-subset.json"),
        json!([
            [12300001, [1230000100011u64, 1230000100021u64]],
            ["12300002", [1230000200011u64]]
        ])
    );
    assert_eq!(
        layout.read_output("reaches-subset.json"),
        json!([{"reach_id": 12300001, "x": 1.5}])
    );
    assert_eq!(
        layout.read_output("sets-subset.json"),
        json!([[{"reach_id": 12300002}, {"reach_id": 12300001}]])
    );
}

#[tokio::test]
async fn test_stage_statistics() {
    let layout = TestLayout::with_sample_data(json!([12300001, 12300002, 12300001]));

    let stats = processor_for(&layout).process().await.unwrap();

    let sets = stats.stage(DatasetKind::Sets).unwrap();
    assert_eq!(sets.records_in, 2);
    assert_eq!(sets.records_out, 1);
    assert_eq!(sets.members_in, 4);
    assert_eq!(sets.members_out, 2);

    let reaches = stats.stage(DatasetKind::Reaches).unwrap();
    assert_eq!((reaches.records_in, reaches.records_out), (2, 1));
    assert_eq!(reaches.members_in, 0);

    assert_eq!(stats.subset_size, 2);
    assert_eq!(stats.records_written(), 1 + 1 + 2 + 1 + 1);
}

#[tokio::test]
async fn test_output_is_two_space_indented() {
    let layout = TestLayout::with_sample_data(json!([12300001]));

    processor_for(&layout).process().await.unwrap();

    let text = std::fs::read_to_string(layout.output_dir.join("reaches-subset.json")).unwrap();
    assert_eq!(
        text,
        "[\n  {\n    \"reach_id\": 12300001,\n    \"x\": 1.5\n  }\n]"
    );
}

#[tokio::test]
async fn test_custom_indent_width() {
    let layout = TestLayout::with_sample_data(json!([12300001]));

    SubsetProcessor::new(
        layout.subset_path.clone(),
        layout.data_dir.clone(),
        layout.output_dir.clone(),
    )
    .unwrap()
    .with_config(SubsetConfig::default().without_progress().with_indent_width(4))
    .process()
    .await
    .unwrap();

    let text = std::fs::read_to_string(layout.output_dir.join("continent-subset.json")).unwrap();
    assert!(text.starts_with("[\n    {\n        \"AF\""));
}

#[tokio::test]
async fn test_empty_subset_writes_empty_outputs() {
    let layout = TestLayout::with_sample_data(json!([]));

    let stats = processor_for(&layout).process().await.unwrap();

    assert_eq!(stats.records_written(), 0);
    for dataset in DatasetKind::ALL {
        assert_eq!(layout.read_output(dataset.output_file()), json!([]));
    }
}

#[tokio::test]
async fn test_untouched_numbers_are_written_back_exactly() {
    let layout = TestLayout::with_sample_data(json!([12300001]));
    layout.write_input(
        "reaches.json",
        r#"[{"reach_id": 12300001, "big": 123456789012345678901234, "neg0": -0, "wse": 1.10}]"#,
    );

    processor_for(&layout).process().await.unwrap();

    let text = std::fs::read_to_string(layout.output_dir.join("reaches-subset.json")).unwrap();
    assert!(text.contains("\"big\": 123456789012345678901234"), "{}", text);
    assert!(text.contains("\"neg0\": -0\n") || text.contains("\"neg0\": -0,"), "{}", text);
    assert!(text.contains("\"wse\": 1.10"), "{}", text);
}
