//! Integration tests for writing exports to disk.

use std::fs;
use tally_analysis::{GroupKey, ScaledClientSummary};
use tally_output::{ExportFormat, Exporter};

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("summary.{}", ExportFormat::Csv.extension()));

    let rows = vec![ScaledClientSummary {
        key: GroupKey::Int(7),
        total_units: 1.0,
        total_shipping_price: 2.0,
        total_revenue: 3.0,
        total_profit: 4.0,
    }];
    rows.export_to_file(&path, ExportFormat::Csv).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("key,"));
    assert!(written.contains("7,1.0,2.0,3.0,4.0"));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let rows: Vec<ScaledClientSummary> = Vec::new();
    let result = rows.export_to_file(
        std::path::Path::new("/nonexistent/dir/summary.json"),
        ExportFormat::Json,
    );

    assert!(result.is_err());
}
