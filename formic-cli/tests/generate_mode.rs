use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn generate_writes_a_loadable_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-p")
        .arg("generate")
        .arg("-o")
        .arg(&path)
        .arg("--dna-size")
        .arg("120")
        .arg("--oligo-size")
        .arg("8")
        .arg("--error-percent")
        .arg("5")
        .arg("-s")
        .arg("42")
        .arg("-q");
    cmd.assert().success();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let dna = lines.next().unwrap();
    assert_eq!(dna.len(), 120);
    for line in lines {
        let mut parts = line.split_whitespace();
        assert_eq!(parts.next().unwrap().len(), 8);
        let count = parts.next().unwrap();
        assert!(count == "inf" || count.parse::<u32>().unwrap() > 0);
    }
}

#[test]
fn generated_instance_solves_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut generate = Command::cargo_bin("formic").unwrap();
    generate
        .arg("-p")
        .arg("generate")
        .arg("-o")
        .arg(&path)
        .arg("--dna-size")
        .arg("40")
        .arg("--oligo-size")
        .arg("6")
        .arg("--error-percent")
        .arg("0")
        .arg("-s")
        .arg("3")
        .arg("-q");
    generate.assert().success();

    let mut solve = Command::cargo_bin("formic").unwrap();
    solve
        .arg("-i")
        .arg(&path)
        .arg("-n")
        .arg("20")
        .arg("-s")
        .arg("3")
        .arg("-q");
    solve
        .assert()
        .success()
        .stdout(predicate::str::contains("Levenshtein distance:"));
}

#[test]
fn generate_requires_an_output_file() {
    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-p").arg("generate").arg("-q");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires --output"));
}

#[test]
fn generate_rejects_oversized_oligos() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut cmd = Command::cargo_bin("formic").unwrap();
    cmd.arg("-p")
        .arg("generate")
        .arg("-o")
        .arg(&path)
        .arg("--dna-size")
        .arg("4")
        .arg("--oligo-size")
        .arg("10")
        .arg("-q");
    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid configuration: dna size 4 cannot hold oligos of size 10",
    ));
}
