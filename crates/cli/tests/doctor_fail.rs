use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("favlink"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL favlink doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 3\n[page]\ndefault_path = \"/tmp/f.html\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("favlink"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL favlink doctor"))
        .stdout(predicate::str::contains("version 3 is unsupported"))
        .stdout(predicate::str::contains("looked for:").not());
}
