use assert_cmd::Command;
use std::fs;
use std::path::Path;

#[allow(deprecated)]
pub fn habitsched_cmd() -> Command {
    let mut cmd = Command::cargo_bin("habitsched").unwrap();
    cmd.env_remove("HABITSCHED_CONFIG");
    cmd.env_remove("HABITSCHED_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_schedule(path: &Path, json: &str) {
    fs::write(path, json).unwrap();
}
