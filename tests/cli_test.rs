use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn draws_samples_with_default_arguments() {
    Command::cargo_bin("example-api")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Drew 10 samples"));
}

#[test]
fn respects_explicit_range_and_count() {
    Command::cargo_bin("example-api")
        .unwrap()
        .args(["--factor", "2.5", "--min", "4", "--max", "4", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drew 3 samples from [4, 4]"))
        .stdout(predicate::str::contains("Observed spread: 4 to 4"));
}

#[test]
fn rejects_inverted_bounds() {
    Command::cargo_bin("example-api")
        .unwrap()
        .args(["--min", "10", "--max", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("range"));
}

#[test]
fn rejects_zero_count() {
    Command::cargo_bin("example-api")
        .unwrap()
        .args(["--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count"));
}

#[test]
fn toml_file_overrides_flags() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "min = 2\nmax = 2\ncount = 5").unwrap();

    Command::cargo_bin("example-api")
        .unwrap()
        .args(["--min", "0", "--max", "100", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Drew 5 samples from [2, 2]"));
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("example-api")
        .unwrap()
        .args(["--config", "/nonexistent/example.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));
}
