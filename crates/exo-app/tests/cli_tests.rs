use exo_form::VALIDATION_MESSAGE;
use exo_test_utils::{SAMPLES_JSON, SYNTHESIS_JSON};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_demo(dir: &TempDir, args: &[&str]) -> Output {
    let samples = dir.path().join("samples.json");
    let synthesis = dir.path().join("synthesis_data.json");
    fs::write(&samples, SAMPLES_JSON).unwrap();
    fs::write(&synthesis, SYNTHESIS_JSON).unwrap();

    Command::new(env!("CARGO_BIN_EXE_exo-demo"))
        .arg("--samples")
        .arg(&samples)
        .arg("--synthesis")
        .arg(&synthesis)
        .args(["--seed", "7"])
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout is not JSON ({err}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn json_report_is_alone_on_stdout() {
    let dir = TempDir::new().unwrap();
    let output = run_demo(&dir, &["--candidate", "K001", "--json"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "report");
    assert_eq!(json["final_prediction"], "PLANET");
    assert_eq!(json["final_score"], "0.8200");
    assert_eq!(json["comparison"]["verdict"], "correct");

    let logs = String::from_utf8_lossy(&output.stderr);
    assert!(logs.contains("session ready"));
    assert!(!logs.contains('\u{1b}'));
}

#[test]
fn json_rejection_carries_message() {
    let dir = TempDir::new().unwrap();
    let output = run_demo(
        &dir,
        &[
            "--field",
            "koi_period=abc",
            "--field",
            "koi_depth=10",
            "--field",
            "dataset=kepler",
            "--json",
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "invalid");
    assert_eq!(json["invalid"], serde_json::json!(["koi_period"]));
    assert_eq!(json["message"], VALIDATION_MESSAGE);
}

#[test]
fn json_listing_is_the_selector() {
    let dir = TempDir::new().unwrap();
    let output = run_demo(&dir, &["--list", "--json"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|option| option["label"].as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Select a sample...",
            "Candidate: K001 (PLANET)",
            "Candidate: K002 (FALSE_POSITIVE)",
            "Candidate: T003 (PLANET)",
        ]
    );
}
