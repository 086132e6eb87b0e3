//! Integration tests for loading configurations and running simulations.

use std::io::Write;

use fastrand::Rng;
use tempfile::NamedTempFile;

use minion_zoo::{MinionError, Simulation, ZooConfig, random_subjects};

/// Helper to create a temporary file with given content.
fn create_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const CONFIG: &str = r#"{
    "labels": [0, 1],
    "seed": 7,
    "minions": [
        { "name": "Aristotle", "policy": "expert" },
        { "name": "Bartleby", "policy": "single_label", "label": 1 },
        { "name": "Chance", "policy": "random" },
        { "name": "Doubter", "policy": "noisy", "confusion_matrix": [0.8, 0.6] },
        { "name": "Contrarian", "policy": "noisy", "confusion_matrix": [0.0, 0.0] }
    ]
}"#;

#[test]
fn test_load_config_from_file() {
    let file = create_config_file(CONFIG);
    let config = ZooConfig::load(file.path()).unwrap();

    assert_eq!(config.minions.len(), 5);
    assert_eq!(config.names()[3], "Doubter");
}

#[test]
fn test_load_missing_file() {
    let err = ZooConfig::load("/nonexistent/zoo.json").unwrap_err();
    assert!(matches!(err, MinionError::Io { .. }));
}

#[test]
fn test_load_malformed_file() {
    let file = create_config_file("{ not json");
    assert!(matches!(
        ZooConfig::load(file.path()).unwrap_err(),
        MinionError::Json(_)
    ));
}

#[test]
fn test_simulation_from_config() {
    let config = ZooConfig::from_json(CONFIG).unwrap();
    let mut roster = config.build_roster().unwrap();
    let subjects = random_subjects(500, &config.labels, &mut Rng::with_seed(3)).unwrap();

    let sim = Simulation::run(&mut roster, &subjects).unwrap();
    assert_eq!(sim.records.len(), 5 * 500);

    let summary = sim.summarize();
    let accuracy = |name: &str| {
        summary
            .iter()
            .find(|s| s.minion_name == name)
            .map(|s| s.accuracy())
            .unwrap()
    };

    assert_eq!(accuracy("Aristotle"), 1.0);
    assert_eq!(accuracy("Contrarian"), 0.0);

    let ones = subjects.iter().filter(|s| s.gold_label == 1).count() as f64 / 500.0;
    assert_eq!(accuracy("Bartleby"), ones);

    let chance = accuracy("Chance");
    assert!((chance - 0.5).abs() < 0.1, "random accuracy {chance}");

    let doubter = accuracy("Doubter");
    assert!(doubter > 0.6 && doubter < 0.8, "noisy accuracy {doubter}");
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let config = ZooConfig::from_json(CONFIG).unwrap();
    let subjects = random_subjects(50, &config.labels, &mut Rng::with_seed(3)).unwrap();

    let first = Simulation::run(&mut config.build_roster().unwrap(), &subjects).unwrap();
    let second = Simulation::run(&mut config.build_roster().unwrap(), &subjects).unwrap();

    assert_eq!(first.records, second.records);
}

#[test]
fn test_write_json_records() {
    let config = ZooConfig::from_json(CONFIG).unwrap();
    let subjects = random_subjects(4, &config.labels, &mut Rng::with_seed(3)).unwrap();
    let sim = Simulation::run(&mut config.build_roster().unwrap(), &subjects).unwrap();

    let mut out = Vec::new();
    sim.write_json(&mut out).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 20);
    assert_eq!(records[0]["minion_name"], "Aristotle");
    assert_eq!(records[0]["policy"], "expert");
}
