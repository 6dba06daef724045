mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

use crate::common::write_ideal_instance;

#[test]
fn solve_reconstructs_error_free_spectrum() {
    let input = NamedTempFile::new().unwrap();
    write_ideal_instance(input.path(), "GTTGCAAATA", 4);

    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-i")
        .arg(input.path())
        .arg("-s")
        .arg("7")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Levenshtein distance: 0"))
        .stdout(predicate::str::contains("GTTGCAAATA"));
}

#[test]
fn solve_is_reproducible_with_a_seed() {
    let input = NamedTempFile::new().unwrap();
    write_ideal_instance(input.path(), "GTTGCAAATATTCTTGTCGG", 4);

    let run = || {
        let mut cmd = Command::cargo_bin("formic").unwrap();
        cmd.arg("-i")
            .arg(input.path())
            .arg("-s")
            .arg("1234")
            .arg("-n")
            .arg("10")
            .arg("-q");
        let output = cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn solve_requires_an_input_file() {
    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-q");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires --input"));
}

#[test]
fn solve_rejects_malformed_instance() {
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), "GTTGCAAATA\nGTTG 1\nTTGCA 1\n").unwrap();

    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-i").arg(input.path()).arg("-q");
    // The user-facing message is the Display form, not the Debug form.
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Fragment length mismatch: 4 vs 5"));
}

#[test]
fn solve_rejects_bad_evaporation() {
    let input = NamedTempFile::new().unwrap();
    write_ideal_instance(input.path(), "GTTGCAAATA", 4);

    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-i").arg(input.path()).arg("-e").arg("1.5").arg("-q");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid configuration: evaporation must be in [0, 1), got 1.5",
        ));
}
