//! These tests are for config files that should be accepted.

use std::fs;

use assert_cmd::prelude::*;

use crate::util::{cpustat_command, HEADER};

#[test]
fn test_empty_config() {
    cpustat_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "-n",
        "1",
        "-s",
        "./tests/fixtures/sample_stat",
    ])
    .assert()
    .success()
    .stdout(format!("{HEADER}10\t20\t30\t40\n"));
}

#[test]
fn test_all_flags() {
    cpustat_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .assert()
        .success()
        .stdout(format!("{HEADER}10\t20\t30\t40\n").repeat(2));
}

#[test]
fn test_numeric_rate() {
    cpustat_command(&[
        "-C",
        "./tests/valid_configs/numeric_rate.toml",
        "-s",
        "./tests/fixtures/sample_stat",
    ])
    .assert()
    .success()
    .stdout(format!("{HEADER}10\t20\t30\t40\n"));
}

#[test]
fn test_creates_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cpustat").join("cpustat.toml");
    let path_str = path.to_str().unwrap();

    cpustat_command(&["-C", path_str, "-n", "1", "-s", "./tests/fixtures/sample_stat"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[flags]"));
    assert!(written.contains("#rate = \"5s\""));
}

#[test]
fn test_no_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cpustat.toml");
    let path_str = path.to_str().unwrap();

    cpustat_command(&[
        "-C",
        path_str,
        "--no_write",
        "-n",
        "1",
        "-s",
        "./tests/fixtures/sample_stat",
    ])
    .assert()
    .success();

    assert!(!path.exists());
}
