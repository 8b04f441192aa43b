//! These tests run the sampler against fixture counter files.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_cpustat_command, HEADER};

#[test]
fn test_samples_repeat() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/sample_stat", "-r", "250ms", "-n", "3"])
        .assert()
        .success()
        .stdout(format!("{HEADER}10\t20\t30\t40\n").repeat(3));
}

#[test]
fn test_full_stat_file() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/full_stat", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(HEADER))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn test_zero_counters_are_nan() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/zero_stat", "-n", "1"])
        .assert()
        .success()
        .stdout(format!("{HEADER}NaN\tNaN\tNaN\tNaN\n"));
}

#[test]
fn test_bad_counter_is_reported() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/bad_nice_stat", "-r", "250ms", "-n", "2"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "failed to sample CPU stats: failed to parse the 'nice' counter",
        ));
}

#[test]
fn test_empty_source_is_reported() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/empty_stat", "-n", "1"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "failed to sample CPU stats: no data to read counters from",
        ));
}

#[test]
fn test_missing_source_is_reported() {
    no_cfg_cpustat_command()
        .args(["-s", "./tests/fixtures/does_not_exist", "-n", "1"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("failed to sample CPU stats"));
}
