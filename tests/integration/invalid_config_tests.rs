//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::cpustat_command;

#[test]
fn test_toml_mismatch_type() {
    cpustat_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_malformed_toml() {
    cpustat_command(&["-C", "./tests/invalid_configs/malformed.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or create the config file.",
        ));
}

#[test]
fn test_invalid_rate() {
    cpustat_command(&["-C", "./tests/invalid_configs/invalid_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'rate' was set with an invalid value, please update it in your config file.",
        ));
}

#[test]
fn test_small_rate() {
    cpustat_command(&["-C", "./tests/invalid_configs/small_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'rate' must be at least 250ms"));
}

/// Arguments are checked before the config file's values are ever needed.
#[test]
fn test_arg_rate_overrides_invalid_config_rate() {
    cpustat_command(&[
        "-C",
        "./tests/invalid_configs/invalid_rate.toml",
        "-r",
        "1s",
        "-n",
        "1",
        "-s",
        "./tests/fixtures/sample_stat",
    ])
    .assert()
    .success();
}
