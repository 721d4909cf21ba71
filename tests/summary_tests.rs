//! End-to-end tests: file to summary, and the `describe` binary

use approx::assert_relative_eq;
use sample_io::read_sample;
use sample_stats::{summarize, SummaryConfig};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn summary_of_file_with_bad_tokens() {
    let file = write_temp("2 4 oops 6\n8 10");
    let config = SummaryConfig::default();
    let outcome = read_sample::<f64>(file.path(), &config.reader);
    assert_eq!(outcome.diagnostics.len(), 1);

    let summary = summarize(&outcome.sample, &config);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.mean, Ok(6.0));
    assert_eq!(summary.variance, Ok(10.0));
    assert_relative_eq!(summary.std_dev.clone().unwrap(), 10f64.sqrt());
    assert_eq!(summary.median, Ok(6.0));
    assert_eq!(summary.hodges_lehmann, Ok(6.0));
    assert_relative_eq!(summary.skewness.clone().unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn summary_serializes_results() {
    let summary = summarize(&[1.0], &SummaryConfig::default());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["mean"]["Ok"], 1.0);
    assert!(json["variance"]["Err"].as_str().unwrap().contains("Insufficient data"));
    assert_eq!(json["quantiles"][1]["p"], 0.5);
}

#[test]
fn config_file_round_trip() {
    let file = write_temp(r#"{"quantiles": [0.9], "moment_orders": [1]}"#);
    let config = SummaryConfig::from_json_file(file.path()).unwrap();
    let summary = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], &config);
    assert_eq!(summary.quantiles.len(), 1);
    assert_eq!(summary.quantiles[0].value, Ok(10.0));
    assert_eq!(summary.central_moments[0].order, 1);
}

#[test]
fn describe_prints_table_and_warnings() {
    let file = write_temp("1 2 3 x 4 5");
    let output = Command::new(env!("CARGO_BIN_EXE_describe"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.lines().any(|l| l.starts_with("mean") && l.ends_with(" 3")));
    assert!(stderr.contains("token 4"));
}

#[test]
fn describe_json_output() {
    let file = write_temp("1 2 3 4 5");
    let output = Command::new(env!("CARGO_BIN_EXE_describe"))
        .arg(file.path())
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variance"]["Ok"], 2.5);
}

#[test]
fn describe_fails_on_invalid_config() {
    let sample = write_temp("1 2 3");
    let config = write_temp(r#"{"quantiles": [2.0]}"#);
    let output = Command::new(env!("CARGO_BIN_EXE_describe"))
        .arg(sample.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn describe_survives_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_describe"))
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
