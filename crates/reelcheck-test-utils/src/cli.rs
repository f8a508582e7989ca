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


//! CLI command helpers for testing the reelcheck binary.
//!
//! Provides convenient wrappers around assert_cmd for testing the reelcheck CLI.

use assert_cmd::Command;
use std::path::Path;

/// Environment variables read by the binary. Cleared so the caller's
/// environment cannot leak into a test.
const REELCHECK_ENV: &[&str] = &[
    "REELCHECK_FFPROBE",
    "REELCHECK_FFMPEG",
    "REELCHECK_LOG_LEVEL",
    "REELCHECK_LOG_FORMAT",
    "REELCHECK_THUMBNAILS",
    "RUST_LOG",
];

/// Creates a new reelcheck Command for testing.
///
/// # Example
/// ```ignore
/// use reelcheck_test_utils::reelcheck;
///
/// reelcheck()
///     .arg("scan")
///     .arg(folder.path())
///     .assert()
///     .success();
/// ```
#[allow(deprecated)] // cargo_bin is deprecated but still works for our use case
pub fn reelcheck() -> Command {
    let mut cmd = Command::cargo_bin("reelcheck").expect("reelcheck binary not found");
    for name in REELCHECK_ENV {
        cmd.env_remove(name);
    }
    cmd
}

/// Fluent API wrapper for common reelcheck command patterns.
pub struct ReelcheckCommand {
    cmd: Command,
}

impl ReelcheckCommand {
    /// Create a new ReelcheckCommand.
    pub fn new() -> Self {
        Self { cmd: reelcheck() }
    }

    /// `reelcheck scan <folder>`
    pub fn scan(folder: &Path) -> Self {
        Self::new().arg("scan").path(folder)
    }

    /// `reelcheck catalog <folder>`
    pub fn catalog(folder: &Path) -> Self {
        Self::new().arg("catalog").path(folder)
    }

    /// Point the binary at fake media tools.
    #[cfg(unix)]
    pub fn with_tools(mut self, tools: &crate::tools::FakeTools) -> Self {
        self.cmd
            .env("REELCHECK_FFPROBE", tools.ffprobe())
            .env("REELCHECK_FFMPEG", tools.ffmpeg());
        self
    }

    /// Set the working directory for the command.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Add an argument to the command.
    pub fn arg(mut self, arg: &str) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Add a path argument to the command.
    pub fn path(mut self, path: &Path) -> Self {
        self.cmd.arg(path);
        self
    }

    /// Add multiple arguments to the command.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Set an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Execute the command and assert success.
    pub fn run_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Execute the command and assert failure.
    pub fn run_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Execute the command without asserting on the status.
    pub fn run(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert()
    }
}

impl Default for ReelcheckCommand {
    fn default() -> Self {
        Self::new()
    }
}
