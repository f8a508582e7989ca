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


//! Working-folder fixtures.
//!
//! Media files written here are not real media. Each one carries the JSON
//! the fake inspection tool should print for it (see [`crate::tools`]), so a
//! test states a file's metadata where it creates the file. Files without
//! JSON content are unreadable to the fake tool.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Probe output builder
pub struct ProbeJson;

impl ProbeJson {
    /// A clip with one video stream
    pub fn video(duration: f64, width: u32, height: u32) -> String {
        format!(
            r#"{{"streams":[{{"codec_name":"h264","codec_type":"video","width":{width},"height":{height}}},{{"codec_name":"aac","codec_type":"audio"}}],"format":{{"duration":"{duration:.6}"}}}}"#
        )
    }

    /// An audio-only file
    pub fn audio(duration: f64) -> String {
        format!(
            r#"{{"streams":[{{"codec_name":"mp3","codec_type":"audio"}}],"format":{{"duration":"{duration:.6}"}}}}"#
        )
    }

    /// A readable clip whose container reports no usable duration
    pub fn video_without_duration(width: u32, height: u32) -> String {
        format!(
            r#"{{"streams":[{{"codec_name":"h264","codec_type":"video","width":{width},"height":{height}}}],"format":{{"duration":"N/A"}}}}"#
        )
    }
}

/// A temporary working folder
pub struct WorkingFolder {
    dir: TempDir,
}

impl WorkingFolder {
    /// Create an empty working folder.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Root of the working folder.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the folder.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a directory (and parents).
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.join(rel)).expect("Failed to create directory");
        self
    }

    /// Write a file (and parent directories).
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Write a file the fake inspection tool cannot read.
    pub fn unreadable(&self, rel: &str) -> &Self {
        self.file(rel, "not media")
    }

    /// Write a complete album: one clip and one audio track.
    pub fn valid_album(&self, album: &str, video_duration: f64, audio_duration: f64) -> &Self {
        self.file(
            &format!("{album}/video/clip.mp4"),
            &ProbeJson::video(video_duration, 1080, 1920),
        )
        .file(
            &format!("{album}/audio/track.mp3"),
            &ProbeJson::audio(audio_duration),
        )
    }
}

impl Default for WorkingFolder {
    fn default() -> Self {
        Self::new()
    }
}
