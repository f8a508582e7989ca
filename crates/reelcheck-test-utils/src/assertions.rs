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


//! Custom test assertions for reelcheck reports.

use assert_cmd::assert::Assert;
use serde_json::Value;

/// Parse the single JSON document a run printed to stdout.
pub fn report_json(assert: &Assert) -> Value {
    let stdout = &assert.get_output().stdout;
    serde_json::from_slice(stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be one JSON document ({e}): {}",
            String::from_utf8_lossy(stdout)
        )
    })
}

/// Assert that a run printed nothing to stdout.
pub fn assert_no_report(assert: &Assert) {
    let stdout = &assert.get_output().stdout;
    assert!(
        stdout.is_empty(),
        "stdout should be empty, got: {}",
        String::from_utf8_lossy(stdout)
    );
}

/// Assert the `errors` array of a validation report.
pub fn assert_report_errors(report: &Value, expected: &[&str]) {
    let errors: Vec<&str> = report["errors"]
        .as_array()
        .expect("report should have an errors array")
        .iter()
        .map(|e| e.as_str().expect("errors should be strings"))
        .collect();
    assert_eq!(errors, expected);
}

/// Look up an album record by directory name.
pub fn album<'a>(report: &'a Value, name: &str) -> &'a Value {
    report["albums"]
        .as_array()
        .expect("report should have an albums array")
        .iter()
        .find(|a| a["album_dir"] == name)
        .unwrap_or_else(|| panic!("album {name} not in report"))
}
