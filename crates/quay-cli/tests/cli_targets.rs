use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn quay_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("quay").unwrap();
    cmd.env("HOME", home);
    cmd
}

const MANIFEST: &str = r#"
[publish]
group = "io.example"
version = "1.0-SNAPSHOT"

[[repository]]
name = "acme"
url = "https://repo.example/acme"
username-env = "QUAY_TARGETS_USER"
password-env = "QUAY_TARGETS_PASS"

[[repository]]
name = "stable"
url = "https://stable.example/maven"
username-env = "QUAY_TARGETS_USER"
password-env = "QUAY_TARGETS_PASS"
snapshots = false

[modules.widget]
"#;

#[test]
fn test_targets_show_snapshot_endpoint_and_skip_opted_out_repo() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Quay.toml"), MANIFEST).unwrap();

    quay_cmd(tmp.path())
        .current_dir(tmp.path())
        .env("QUAY_TARGETS_USER", "deployer")
        .env("QUAY_TARGETS_PASS", "hunter2")
        .args(["targets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("io.example:widget:1.0-SNAPSHOT (snapshot)"))
        .stdout(predicate::str::contains("mavenLocal"))
        .stdout(predicate::str::contains("acmeSnapshots"))
        .stdout(predicate::str::contains("https://repo.example/acme/snapshots"))
        .stdout(predicate::str::contains("stable").not())
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_targets_report_missing_slot() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Quay.toml"), MANIFEST).unwrap();
    fs::write(tmp.path().join(".quay.env"), "QUAY_TARGETS_USER=deployer\n").unwrap();

    quay_cmd(tmp.path())
        .current_dir(tmp.path())
        .env_remove("QUAY_TARGETS_PASS")
        .args(["targets"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "unresolved: Missing QUAY_TARGETS_PASS environment variable",
        ));
}
