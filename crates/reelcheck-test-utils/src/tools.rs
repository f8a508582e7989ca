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


//! Fake media tools.
//!
//! Small shell scripts standing in for ffprobe and ffmpeg so the binary can
//! be exercised end to end without real media:
//!
//! - `ffprobe` prints the probed file's own contents when they start with `{`
//!   and exits 1 otherwise.
//! - `ffmpeg` creates its output file (the last argument), or exits 1 when
//!   built with [`FakeTools::with_failing_ffmpeg`].

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_FFPROBE: &str = r#"#!/bin/sh
for last; do :; done
if [ "$(head -c 1 "$last" 2>/dev/null)" = "{" ]; then
    cat "$last"
    exit 0
fi
exit 1
"#;

const FAKE_FFMPEG: &str = r#"#!/bin/sh
for last; do :; done
: > "$last"
"#;

const FAILING_FFMPEG: &str = "#!/bin/sh\nexit 1\n";

/// A directory holding fake `ffprobe` and `ffmpeg` executables
pub struct FakeTools {
    dir: TempDir,
}

impl FakeTools {
    /// Install both fake tools.
    pub fn new() -> Self {
        Self::install(FAKE_FFMPEG)
    }

    /// Install a fake ffprobe and an ffmpeg that always fails.
    pub fn with_failing_ffmpeg() -> Self {
        Self::install(FAILING_FFMPEG)
    }

    fn install(ffmpeg_script: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        write_script(&dir.path().join("ffprobe"), FAKE_FFPROBE);
        write_script(&dir.path().join("ffmpeg"), ffmpeg_script);
        Self { dir }
    }

    /// Path of the fake ffprobe.
    pub fn ffprobe(&self) -> PathBuf {
        self.dir.path().join("ffprobe")
    }

    /// Path of the fake ffmpeg.
    pub fn ffmpeg(&self) -> PathBuf {
        self.dir.path().join("ffmpeg")
    }
}

impl Default for FakeTools {
    fn default() -> Self {
        Self::new()
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).expect("Failed to write fake tool");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
}
