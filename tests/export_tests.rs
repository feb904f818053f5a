mod common;
use common::*;

use serde_json::Value;

fn export_batch(fixture: &BatchFixture, output: &str) -> (String, String, i32) {
    run_logsweep(&[
        "-c",
        &fixture.config_path,
        "-o",
        output,
        "--fail-rate",
        "0",
        "--no-delay",
    ])
}

#[test]
fn test_export_writes_report_array() {
    let fixture = mixed_batch_fixture();
    let output = fixture.dir.path().join("report.json");
    let (stdout, _stderr, exit_code) = export_batch(&fixture, output.to_str().unwrap());

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Export complete."));

    let written = std::fs::read_to_string(&output).expect("Report should exist");
    let report: Value = serde_json::from_str(&written).expect("Report should be valid JSON");
    let entries = report.as_array().expect("Report should be a JSON array");
    assert_eq!(entries.len(), 4);

    for entry in entries {
        let object = entry.as_object().unwrap();
        for key in [
            "log_id",
            "file_path",
            "status",
            "message",
            "error_details",
            "process_time",
        ] {
            assert!(object.contains_key(key), "Entry should have key '{}'", key);
        }

        let failed = entry["status"] == "FAILED";
        let has_details = !entry["error_details"].as_str().unwrap().is_empty();
        assert_eq!(
            failed, has_details,
            "error_details must be non-empty exactly for FAILED entries"
        );
    }

    let nginx = entries.iter().find(|e| e["log_id"] == "nginx").unwrap();
    assert_eq!(nginx["status"], "SUCCESS");
    assert_eq!(
        nginx["message"],
        "Nginx access log analyzed: 5 entries processed"
    );

    let missing = entries.iter().find(|e| e["log_id"] == "missing").unwrap();
    assert_eq!(missing["status"], "FAILED");
    assert_eq!(missing["message"], "File access failed");
}

#[test]
fn test_export_creates_intermediate_directories() {
    let fixture = mixed_batch_fixture();
    let output = fixture.dir.path().join("nested/deeper/report.json");
    let (_stdout, _stderr, exit_code) = export_batch(&fixture, output.to_str().unwrap());

    assert_eq!(exit_code, 0);
    assert!(output.exists(), "Exporter should create missing directories");
}

#[test]
fn test_export_failure_is_fatal() {
    let fixture = mixed_batch_fixture();
    // Parent is a regular file, so the directory cannot be created
    let blocker = write_file(fixture.dir.path(), "blocker", "x");
    let output = format!("{}/report.json", blocker);

    let (_stdout, stderr, exit_code) = export_batch(&fixture, &output);
    assert_eq!(exit_code, 1, "Export failure should exit 1");
    assert!(
        stderr.contains("Error exporting results"),
        "Stderr should report the export failure, got: {}",
        stderr
    );
}

#[test]
fn test_export_content_is_stable_across_runs() {
    let fixture = mixed_batch_fixture();
    let first = fixture.dir.path().join("first.json");
    let second = fixture.dir.path().join("second.json");

    export_batch(&fixture, first.to_str().unwrap());
    export_batch(&fixture, second.to_str().unwrap());

    // process_time varies between runs; order varies with scheduling.
    // Everything else must match.
    let normalize = |path: &std::path::Path| -> Vec<Value> {
        let mut report: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        for entry in &mut report {
            entry["process_time"] = Value::Null;
        }
        report.sort_by_key(|e| e["log_id"].as_str().unwrap().to_string());
        report
    };

    assert_eq!(normalize(&first), normalize(&second));
}
