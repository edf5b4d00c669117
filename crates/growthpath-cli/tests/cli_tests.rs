//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ANSWERS: &str = "5,4,5,4,2,5,4,2,5,4,2,4,4,5,1";

/// Five wrong short-term rounds, every word, every problem and the letters.
const MEMORY_SCRIPT: &str = "0\n0\n0\n0\n0\n\
elephant, guitar, rainbow, telescope, butterfly\n\
mountain, keyboard, sandwich, umbrella, bicycle\n\n\
12\n7\n12\n9\n15\n13\n12\n4\nRMKLPTNS\n";

fn growthpath(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("growthpath").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("GROWTHPATH_FAST", "1")
        .env_remove("GROWTHPATH_STORE")
        .env_remove("GROWTHPATH_SEED")
        .arg("--store")
        .arg(dir.path().join("data.json"));
    cmd
}

fn take_all(dir: &TempDir) {
    growthpath(dir)
        .args(["personality", "--answers", ANSWERS])
        .assert()
        .success();
    growthpath(dir)
        .arg("memory")
        .write_stdin(MEMORY_SCRIPT)
        .assert()
        .success();
    growthpath(dir)
        .args(["speech", "--topic", "2", "--duration", "45", "--seed", "7"])
        .assert()
        .success();
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created growthpath.toml"))
        .stdout(predicate::str::contains("growthpath personality"));

    assert!(dir.path().join("growthpath.toml").exists());

    growthpath(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn personality_from_answers_is_stored() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["personality", "--answers", ANSWERS])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personality assessment complete"))
        .stdout(predicate::str::contains("Openness"));

    let stored = read_json(&dir.path().join("data.json"));
    let personality = &stored["personalityResults"];
    for key in [
        "openness",
        "conscientiousness",
        "extraversion",
        "agreeableness",
        "neuroticism",
    ] {
        let score = personality[key].as_u64().unwrap();
        assert!(score <= 100, "{key} = {score}");
    }
}

#[test]
fn personality_rejects_out_of_range_answer() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["personality", "--answers", "9,3,3,3,3,3,3,3,3,3,3,3,3,3,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn memory_session_from_stdin() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .arg("memory")
        .write_stdin(MEMORY_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Long-term: 10/10 words"))
        .stdout(predicate::str::contains("overall 67%"));

    let stored = read_json(&dir.path().join("data.json"));
    assert_eq!(stored["memoryResults"]["shortTerm"], 0);
    assert_eq!(stored["memoryResults"]["longTerm"], 100);
    assert_eq!(stored["memoryResults"]["working"], 100);
    assert_eq!(stored["memoryResults"]["overall"], 67);
}

#[test]
fn memory_fails_when_input_ends_early() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .arg("memory")
        .write_stdin("123\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn speech_with_fixed_duration() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["speech", "--topic", "2", "--duration", "45", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic 2:"))
        .stdout(predicate::str::contains("0:45"));

    let stored = read_json(&dir.path().join("data.json"));
    assert_eq!(stored["speechResults"]["duration"], 45);
    let overall = stored["speechResults"]["overall"].as_u64().unwrap();
    assert!(overall <= 100);
}

#[test]
fn speech_rejects_unknown_topic() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["speech", "--topic", "9", "--duration", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic 9 does not exist"));

    growthpath(&dir)
        .args(["speech", "--topic", "0", "--duration", "30"])
        .assert()
        .failure();
}

#[test]
fn results_requires_a_taken_assessment() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["results", "memory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("growthpath memory"));

    growthpath(&dir)
        .args(["results", "juggling"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown domain"));
}

#[test]
fn status_tracks_completion() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 0/3"));

    growthpath(&dir)
        .args(["personality", "--answers", ANSWERS])
        .assert()
        .success();

    growthpath(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 1/3 (33%)"))
        .stdout(predicate::str::contains("growthpath speech"));
}

#[test]
fn report_names_missing_assessments() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["personality", "--answers", ANSWERS])
        .assert()
        .success();

    growthpath(&dir)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("memory"))
        .stderr(predicate::str::contains("growthpath speech"));
}

#[test]
fn report_in_every_format() {
    let dir = TempDir::new().unwrap();
    take_all(&dir);

    growthpath(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Complete Development Profile"))
        .stdout(predicate::str::contains("Choose an improvement plan"));

    let json_path = dir.path().join("out/report.json");
    growthpath(&dir)
        .args(["report", "--format", "json", "--out"])
        .arg(&json_path)
        .assert()
        .success();
    let report = read_json(&json_path);
    assert!(report["analysis"]["overallScore"].as_u64().unwrap() <= 100);
    assert!(report["analysis"]["developmentAreas"]["primary"].is_string());

    growthpath(&dir)
        .args(["report", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# "));

    let html_path = dir.path().join("report.html");
    growthpath(&dir)
        .args(["report", "--format", "html", "--out"])
        .arg(&html_path)
        .assert()
        .success();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<html"));

    growthpath(&dir)
        .args(["report", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn plan_lifecycle() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["plan", "create", "--duration", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("assessments not completed"));

    take_all(&dir);

    growthpath(&dir)
        .args(["plan", "create", "--duration", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported plan duration"));

    growthpath(&dir)
        .args(["plan", "create", "--duration", "45", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 weeks"));

    growthpath(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tips for success"))
        .stdout(predicate::str::contains("0/7 weeks"));

    growthpath(&dir)
        .args(["plan", "complete", "--week", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 1 marked complete"))
        .stdout(predicate::str::contains("1/7 weeks (14%)"));

    growthpath(&dir)
        .args(["plan", "complete", "--week", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the plan"));

    let stored = read_json(&dir.path().join("data.json"));
    assert_eq!(stored["completedWeeks"], serde_json::json!([1]));

    growthpath(&dir)
        .args(["plan", "complete", "--week", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked not complete"));
}

#[test]
fn plan_show_is_seeded() {
    let dir = TempDir::new().unwrap();
    take_all(&dir);

    growthpath(&dir)
        .args(["plan", "create", "--duration", "90", "--seed", "11"])
        .assert()
        .success();

    let first = growthpath(&dir)
        .args(["plan", "show", "--format", "json"])
        .output()
        .unwrap();
    let second = growthpath(&dir)
        .args(["plan", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let plan: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(plan["weeks"].as_array().unwrap().len(), 13);
}

#[test]
fn plan_complete_without_plan() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["plan", "complete", "--week", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan create"));
}

#[test]
fn reset_clears_everything() {
    let dir = TempDir::new().unwrap();
    take_all(&dir);

    growthpath(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    growthpath(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 0/3"));
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("data.json"), "{not json").unwrap();

    growthpath(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    growthpath(&dir)
        .args(["--config", "nope.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
