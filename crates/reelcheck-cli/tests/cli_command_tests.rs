// reelcheck - Media asset validation and cataloging
// Copyright (C) 2025 reelcheck contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


//! Argument handling, version and completions

mod common;

use common::reelcheck;
use predicates::prelude::*;

#[test]
fn test_no_subcommand_exits_1() {
    reelcheck()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_scan_without_folder_exits_1() {
    reelcheck()
        .arg("scan")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("WORKING_FOLDER"));
}

#[test]
fn test_catalog_without_folder_exits_1() {
    reelcheck()
        .arg("catalog")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WORKING_FOLDER"));
}

#[test]
fn test_unknown_log_format_exits_1() {
    reelcheck()
        .args(["--log-format", "xml", "scan", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_help_exits_0() {
    reelcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn test_version_flag() {
    reelcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command() {
    reelcheck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("reelcheck "))
        .stdout(predicate::str::contains("license: AGPL-3.0"));
}

#[test]
fn test_completions_bash() {
    reelcheck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reelcheck"));
}

#[test]
fn test_missing_config_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    reelcheck()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("scan")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_invalid_config_value_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("reelcheck.toml");
    std::fs::write(&config, "[catalog]\nthumbnail_quality = 0\n").unwrap();

    reelcheck()
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("catalog.thumbnail_quality"));
}
