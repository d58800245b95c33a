//! Integration tests for new, show, edit and validate commands

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{habitsched_cmd, write_schedule};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_new_writes_default_schedule() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");

    habitsched_cmd()
        .arg("new")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created {}", file.display())))
        .stdout(predicate::str::contains("Frequency: daily (every day)"))
        .stdout(predicate::str::contains("Reminder: 9:00 AM every day"));

    let json = read_json(&file);
    assert_eq!(json["frequency"]["type"], "daily");
    assert_eq!(json["frequency"]["days"], serde_json::json!([0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(json["frequency"]["timesPerDay"], 1);
    assert_eq!(json["reminder"]["enabled"], true);
    assert_eq!(json["reminder"]["time"], "09:00");
}

#[test]
fn test_new_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");

    habitsched_cmd().arg("new").arg(&file).assert().success();
    habitsched_cmd()
        .arg("new")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    habitsched_cmd()
        .arg("new")
        .arg(&file)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_new_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    let config = temp.path().join("habitsched.toml");
    fs::write(&config, "default_reminder_time = \"06:30\"\n").unwrap();

    habitsched_cmd()
        .arg("new")
        .arg(&file)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder: 6:30 AM"));

    assert_eq!(read_json(&file)["reminder"]["time"], "06:30");
}

#[test]
fn test_edit_to_weekly() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    habitsched_cmd().arg("new").arg(&file).assert().success();

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("type=weekly")
        .arg("times=+2")
        .arg("time=18:45")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frequency: weekly (Mon, Wed, Fri)"))
        .stdout(predicate::str::contains("Times per day: 3"))
        .stdout(predicate::str::contains("Reminder: 6:45 PM on Mon, Wed, Fri"));

    let json = read_json(&file);
    assert_eq!(json["frequency"]["days"], serde_json::json!([1, 3, 5]));
    assert_eq!(json["reminder"]["days"], serde_json::json!([1, 3, 5]));
    assert_eq!(json["reminder"]["time"], "18:45");
}

#[test]
fn test_edit_reminder_days_follow_frequency() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    write_schedule(
        &file,
        r#"{"frequency":{"type":"custom","days":[1,3,5],"timesPerDay":1},
            "reminder":{"enabled":true,"time":"08:00","days":[3,5]}}"#,
    );

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("day=wed")
        .arg("day=fri")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder: 8:00 AM on Mon"));

    let json = read_json(&file);
    assert_eq!(json["frequency"]["days"], serde_json::json!([1]));
    assert_eq!(json["reminder"]["days"], serde_json::json!([1]));
}

#[test]
fn test_edit_day_on_daily_habit_keeps_full_week() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    habitsched_cmd().arg("new").arg(&file).assert().success();

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("day=mon")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frequency: daily (every day)"));

    let json = read_json(&file);
    assert_eq!(json["frequency"]["days"], serde_json::json!([0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(json["reminder"]["days"], serde_json::json!([0, 1, 2, 3, 4, 5, 6]));
}

#[test]
fn test_edit_invalid_time_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    habitsched_cmd().arg("new").arg(&file).assert().success();
    let before = fs::read_to_string(&file).unwrap();

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("type=custom")
        .arg("time=24:00")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid time"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_edit_unknown_key() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    habitsched_cmd().arg("new").arg(&file).assert().success();

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("colour=blue")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown edit key"));
}

#[test]
fn test_edit_missing_file() {
    let temp = TempDir::new().unwrap();

    habitsched_cmd()
        .arg("edit")
        .arg(temp.path().join("nope.json"))
        .arg("type=daily")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("habitsched new"));
}

#[test]
fn test_edit_cannot_save_invalid_schedule() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    write_schedule(
        &file,
        r#"{"frequency":{"type":"custom","days":[1,2],"timesPerDay":1},
            "reminder":{"enabled":true,"time":"25:00","days":[1]}}"#,
    );

    habitsched_cmd()
        .arg("edit")
        .arg(&file)
        .arg("times=+1")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not a valid time of day"));

    assert_eq!(read_json(&file)["frequency"]["timesPerDay"], 1);
}

#[test]
fn test_validate_reports_every_problem() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    write_schedule(
        &file,
        r#"{"frequency":{"type":"custom","days":[1,2],"timesPerDay":0},
            "reminder":{"enabled":true,"time":"08:00","days":[1,2,3]}}"#,
    );

    habitsched_cmd()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Times per day must be between 1 and 10"))
        .stderr(predicate::str::contains("not scheduled on: Wed"));
}

#[test]
fn test_validate_valid_schedule() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    write_schedule(
        &file,
        r#"{"frequency":{"type":"custom","days":[1,2],"timesPerDay":1},
            "reminder":{"enabled":true,"time":"08:00","days":[1,2]}}"#,
    );

    habitsched_cmd()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule is valid"));
}

#[test]
fn test_show_lists_problems() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("habit.json");
    write_schedule(
        &file,
        r#"{"frequency":{"type":"weekly","days":[1,3,5],"timesPerDay":1},
            "reminder":{"enabled":true,"time":"07:00","days":[0,1]}}"#,
    );

    habitsched_cmd()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Frequency: weekly (Mon, Wed, Fri)"))
        .stdout(predicate::str::contains("Problems:"))
        .stdout(predicate::str::contains("not scheduled on: Sun"));
}
