use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;
use truco_core::game::snapshot::GameIntel;
use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::rank::Rank;
use truco_core::model::suit::Suit;
use truco_core::model::trick::TrickOutcome;

fn write_config(dir: &std::path::Path, structured: bool) -> std::path::PathBuf {
    let summary = dir.join("out").join("{run_id}").join("summary.json");
    let yaml = format!(
        r#"run_id: "smoke"
sample:
  seed: 7
  hands: 16
outputs:
  summary_json: "{}"
logging:
  enable_structured: {}
  tracing_level: "debug"
"#,
        summary.display(),
        structured
    );
    let path = dir.join("bench.yaml");
    fs::write(&path, yaml).expect("write config");
    path
}

#[test]
fn sample_writes_summary() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), true);

    Command::cargo_bin("truco-bench")
        .expect("binary")
        .args(["--config", config.to_str().expect("utf8 path"), "sample"])
        .args(["--hands", "12", "--seed", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sampled 12 hands"))
        .stdout(predicate::str::contains("Telemetry log:"));

    let summary_path = dir.path().join("out").join("smoke").join("summary.json");
    let raw = fs::read_to_string(&summary_path).expect("summary written");
    let summary: serde_json::Value = serde_json::from_str(&raw).expect("summary json");
    assert_eq!(summary["hands"], 12);
    assert_eq!(summary["seed"], 99);
    let tiers: u64 = summary["tier_histogram"]
        .as_array()
        .expect("histogram")
        .iter()
        .filter_map(|count| count.as_u64())
        .sum();
    assert_eq!(tiers, 12);
    assert!(dir.path().join("out").join("smoke").join("telemetry.jsonl").exists());
}

#[test]
fn sample_validate_only_skips_run() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), false);

    Command::cargo_bin("truco-bench")
        .expect("binary")
        .args(["--config", config.to_str().expect("utf8 path"), "sample"])
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation-only mode"));

    assert!(!dir.path().join("out").join("smoke").exists());
}

#[test]
fn sample_rejects_zero_hands() {
    Command::cargo_bin("truco-bench")
        .expect("binary")
        .args(["sample", "--hands", "0", "--validate-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample.hands"));
}

#[test]
fn decide_prints_report() {
    let dir = tempdir().expect("tempdir");
    // Lost the opening trick and now answering a jack lead.
    let intel = GameIntel::new(
        Hand::with_cards(vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Four, Suit::Spades),
        ]),
        Card::new(Rank::Seven, Suit::Diamonds),
    )
    .with_outcomes([TrickOutcome::Lost])
    .with_opponent_card(Card::new(Rank::Jack, Suit::Spades));
    let snapshot = dir.path().join("snapshot.json");
    fs::write(&snapshot, intel.to_json().expect("json")).expect("write snapshot");

    let output = Command::cargo_bin("truco-bench")
        .expect("binary")
        .args(["decide", "--snapshot", snapshot.to_str().expect("utf8 path")])
        .output()
        .expect("run decide");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("report json");
    assert_eq!(report["bot"], "skoltable");
    assert_eq!(report["trick"], "second");
    assert!(report["respond_code"].is_i64());
    assert!(report["card"].is_object());
}

#[test]
fn decide_rejects_invalid_snapshot() {
    let dir = tempdir().expect("tempdir");
    let snapshot = dir.path().join("snapshot.json");
    fs::write(&snapshot, "{ \"hand\": [] }").expect("write snapshot");

    Command::cargo_bin("truco-bench")
        .expect("binary")
        .args(["decide", "--snapshot", snapshot.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse snapshot"));
}
