//! End-to-end tests for the `list` command.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn test_list_builtin_fleet() {
    cargo_bin_cmd!("repo-forge")
        .arg("--color")
        .arg("never")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUMMARY] Repository summary"))
        .stdout(predicate::str::contains("Public repositories (2):"))
        .stdout(predicate::str::contains("Private repositories (7):"))
        .stdout(predicate::str::contains("cfstudio-docs"))
        .stdout(predicate::str::contains("cfstudio-plugin-github"));
}

#[test]
fn test_list_with_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("forge.yaml");
    config
        .write_str(
            "repositories:\n  - name: solo\n    description: The only one\n    category: docs\n",
        )
        .unwrap();

    cargo_bin_cmd!("repo-forge")
        .arg("--color")
        .arg("never")
        .arg("list")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Public repositories (1):"))
        .stdout(predicate::str::contains("solo - The only one"))
        .stdout(predicate::str::contains("Private repositories (0):"));
}

#[test]
fn test_list_writes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();

    cargo_bin_cmd!("repo-forge")
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success();

    // The descriptor list is only read; no repository directories appear
    temp.child("cfstudio-core").assert(predicate::path::missing());
    temp.child("cfstudio-docs").assert(predicate::path::missing());
}

#[test]
fn test_list_missing_config_fails() {
    cargo_bin_cmd!("repo-forge")
        .arg("list")
        .arg("--config")
        .arg("/nonexistent/forge.yaml")
        .assert()
        .failure();
}
