//
//  hangar-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end smoke tests for the `hangar` binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    Command::cargo_bin("hangar")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("app"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("secret"));
}

#[test]
fn version_subcommand_prints_version() {
    Command::cargo_bin("hangar")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn app_get_without_host_fails_with_hint() {
    Command::cargo_bin("hangar")
        .unwrap()
        .env_remove("HANGAR_HOST")
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .args(["app", "get", "storefront"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API host configured"));
}
