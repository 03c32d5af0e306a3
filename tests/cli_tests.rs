//! CLI integration tests using the REAL mdredirect binary

mod common;

use common::{TestSite, mdredirect_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    mdredirect_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect"))
        .stdout(predicate::str::contains("stamp"))
        .stdout(predicate::str::contains("recover"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_stamp_help_hides_fault_point() {
    mdredirect_cmd()
        .args(["stamp", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-path"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("fault-point").not());
}

#[test]
fn test_version_output() {
    mdredirect_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("mdredirect ", env!("CARGO_PKG_VERSION"))))
        .stdout(predicate::str::contains("minimum rust"));
}

#[test]
fn test_completions_bash() {
    mdredirect_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdredirect"));
}

#[test]
fn test_completions_unknown_shell() {
    mdredirect_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_stamp_without_base_path_fails() {
    let site = TestSite::new();
    mdredirect_cmd()
        .args(["stamp", "--root"])
        .arg(site.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing setting 'urlBasePrefix'"));
}

#[test]
fn test_stamp_missing_root_fails() {
    let site = TestSite::new();
    mdredirect_cmd()
        .args(["stamp", "--base-path", "/docs/", "--root"])
        .arg(site.root().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory not found"));
}

#[test]
fn test_missing_config_file_fails() {
    let site = TestSite::new();
    mdredirect_cmd()
        .arg("--config")
        .arg(site.root().join("absent.yaml"))
        .arg("recover")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_settings_from_environment() {
    let site = TestSite::new();
    site.write_file("intro.md", "---\nid: intro\n---\nbody\n");

    mdredirect_cmd()
        .env("MDREDIRECT_ROOT", site.root())
        .env("MDREDIRECT_BASE_PATH", "/env/")
        .arg("stamp")
        .assert()
        .success();

    assert!(site.read_file("intro.md").contains("- /env/intro\n"));
}
