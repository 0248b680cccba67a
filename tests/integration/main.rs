//! Integration tests for the sigowners CLI
//!
//! Each test lays out a store directory holding a registry, writes an event
//! payload and runs the binary against it.


#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use common::fixtures::{storage_registry, to_yaml};

/// Helper function to create a sigowners command
fn sigowners() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("sigowners"))
}

/// A store directory with the storage registry at the default location
fn store_with_registry() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "new-op/community/sigs.yaml", &to_yaml(&storage_registry()));
    dir
}

/// Write `content` to `root/relative`, creating parents
fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Basic commands
// =============================================================================

#[test]
fn test_version() {
    sigowners()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sigowners v"));
}

#[test]
fn test_version_json() {
    sigowners()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_command_prints_hint() {
    sigowners().assert().success().stdout(predicate::str::contains("--help"));
}

#[test]
fn test_help_lists_commands() {
    sigowners()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("owners"))
        .stdout(predicate::str::contains("issue"));
}

// =============================================================================
// owners
// =============================================================================

#[test]
fn test_owners_for_file() {
    let store = store_with_registry();

    sigowners()
        .args(["owners", "--label", "sig/storage", "--file", "a.go", "--store"])
        .arg(store.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("group storage"))
        .stdout(predicate::str::contains("owners: alice"));
}

#[test]
fn test_owners_for_repo_json() {
    let store = store_with_registry();

    sigowners()
        .args(["--json", "owners", "--label", "sig/storage", "--repo", "storage-docs", "--store"])
        .arg(store.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dora\""))
        .stdout(predicate::str::contains("\"fallback\": false"));
}

#[test]
fn test_owners_unknown_label_uses_fallback() {
    let store = store_with_registry();

    sigowners()
        .args(["owners", "--label", "sig/network", "--file", "a.go", "--store"])
        .arg(store.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no group"))
        .stdout(predicate::str::contains("fallback"));
}

#[test]
fn test_owners_file_and_repo_conflict() {
    let store = store_with_registry();

    sigowners()
        .args(["owners", "--label", "sig/storage", "--file", "a.go", "--repo", "docs", "--store"])
        .arg(store.path())
        .assert()
        .failure();
}

#[test]
fn test_missing_registry_fails() {
    let store = TempDir::new().unwrap();

    sigowners()
        .args(["owners", "--label", "sig/storage", "--store"])
        .arg(store.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("new-op/community/sigs.yaml@master"));
}

// =============================================================================
// config
// =============================================================================

#[test]
fn test_config_moves_registry() {
    let store = TempDir::new().unwrap();
    write(store.path(), "acme/meta/owners.yaml", &to_yaml(&storage_registry()));
    let config = write(
        store.path(),
        "sigowners.toml",
        "[registry]\nowner = \"acme\"\nrepo = \"meta\"\npath = \"owners.yaml\"\nref = \"main\"\n",
    );

    sigowners()
        .arg("--config")
        .arg(&config)
        .args(["owners", "--label", "sig/storage", "--file", "a.go", "--store"])
        .arg(store.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_invalid_config_fails() {
    let store = store_with_registry();
    let config = write(store.path(), "bad.toml", "[reply]\nsurface_tiers = 0\n");

    sigowners()
        .arg("--config")
        .arg(&config)
        .args(["owners", "--label", "sig/storage", "--store"])
        .arg(store.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("surface_tiers"));
}

// =============================================================================
// handle
// =============================================================================

#[cfg(not(feature = "gitee"))]
#[test]
fn test_handle_requires_gitee_feature() {
    let events = TempDir::new().unwrap();
    let event = write(events.path(), "pr.json", "{}");

    sigowners()
        .args(["handle", "pr", "--event"])
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("gitee"));
}

#[test]
fn test_handle_rejects_unknown_kind() {
    sigowners()
        .args(["handle", "merge", "--event", "event.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("merge"));
}
