use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_commands_and_flags() {
    cargo_bin_cmd!("tally")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("tally")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_list_prints_the_builtin_seed() {
    cargo_bin_cmd!("tally")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Linen Shirt M"))
        .stdout(predicate::str::contains("Total entries: 7"));
}

#[test]
fn test_list_uses_a_seed_override() {
    let mut seed = tempfile::NamedTempFile::new().unwrap();
    writeln!(seed, "[[entry]]\nname = \"Mug\"\nprice = 4.5").unwrap();

    cargo_bin_cmd!("tally")
        .args(["--seed", seed.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mug"))
        .stdout(predicate::str::contains("4.50"))
        .stdout(predicate::str::contains("Total entries: 1"));
}

#[test]
fn test_list_skips_invalid_seed_entries() {
    let mut seed = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        seed,
        "[[entry]]\nname = \"Mug\"\nprice = 4.5\n\n[[entry]]\nname = \"\"\nprice = 1.0"
    )
    .unwrap();

    cargo_bin_cmd!("tally")
        .args(["--seed", seed.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 1"));
}

#[test]
fn test_missing_seed_file_fails_with_context() {
    cargo_bin_cmd!("tally")
        .args(["--seed", "/nonexistent/seed.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load seed entries"));
}

#[test]
fn test_log_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("tally.log");

    cargo_bin_cmd!("tally")
        .args(["--log-file", log_path.to_str().unwrap(), "list"])
        .assert()
        .success();

    assert!(log_path.exists());
}
