use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

fn manager(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir)
        .env_remove("YOUTUBE_DATA_FILE")
        .env_remove("YOUTUBE_LOG");
    cmd
}

#[test]
fn adding_videos() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("youtube.txt");

    // First run: no data file yet
    manager(dir.path())
        .write_stdin("2\nA\n1:00\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter video name: Enter video time: "));

    let saved: Value = serde_json::from_str(&fs::read_to_string(&data_file)?)?;
    assert_eq!(saved, json!([{ "name": "A", "time": "1:00" }]));

    // Second run appends after what was loaded
    manager(dir.path())
        .write_stdin("2\nB\n2:00\n5\n")
        .assert()
        .success();

    let saved: Value = serde_json::from_str(&fs::read_to_string(&data_file)?)?;
    assert_eq!(
        saved,
        json!([
            { "name": "A", "time": "1:00" },
            { "name": "B", "time": "2:00" }
        ])
    );

    Ok(())
}

#[test]
fn duplicates_and_empty_fields_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    manager(dir.path())
        .write_stdin("2\nA\n1:00\n2\nA\n1:00\n2\n\n\n5\n")
        .assert()
        .success();

    let saved: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("youtube.txt"))?)?;
    assert_eq!(
        saved,
        json!([
            { "name": "A", "time": "1:00" },
            { "name": "A", "time": "1:00" },
            { "name": "", "time": "" }
        ])
    );

    Ok(())
}

#[test]
fn data_file_flag_selects_storage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let custom = dir.path().join("lists/favourites.json");

    manager(dir.path())
        .arg("--data-file")
        .arg(&custom)
        .write_stdin("2\nA\n1:00\n5\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("youtube.txt").exists());

    manager(dir.path())
        .env("YOUTUBE_DATA_FILE", &custom)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. A, Duration: 1:00"));

    Ok(())
}
