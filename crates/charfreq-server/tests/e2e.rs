//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn server_help_flag() {
    Command::cargo_bin("charfreq-server")
        .expect("binary not found")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tutorial server"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn server_version_flag() {
    Command::cargo_bin("charfreq-server")
        .expect("binary not found")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("charfreq-server"));
}

#[test]
fn seed_help_flag() {
    Command::cargo_bin("charfreq-seed")
        .expect("binary not found")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("document store"));
}

#[test]
fn seed_requires_a_store_url() {
    Command::cargo_bin("charfreq-seed")
        .expect("binary not found")
        .env_remove("CHARFREQ_REDIS_URL")
        .arg("somefile.txt")
        .assert()
        .failure();
}
