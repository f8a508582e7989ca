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


//! Shared stubs for reelcheck-media integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use reelcheck_media::{FrameExtractor, MediaProber, ProbeOutcome, ProbeResult, StreamInfo};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Prober answering from a file-name table; unknown names are unreadable
#[derive(Default)]
pub struct StubProber {
    results: HashMap<String, ProbeResult>,
    calls: Mutex<Vec<String>>,
}

impl StubProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file with a duration and no streams
    pub fn with_duration(mut self, name: &str, duration: f64) -> Self {
        self.results.insert(
            name.to_string(),
            ProbeResult {
                duration_seconds: Some(duration),
                streams: vec![],
            },
        );
        self
    }

    /// A file with one video stream
    pub fn with_video(mut self, name: &str, duration: Option<f64>, width: u32, height: u32) -> Self {
        self.results.insert(
            name.to_string(),
            ProbeResult {
                duration_seconds: duration,
                streams: vec![StreamInfo {
                    codec_type: Some("video".to_string()),
                    codec_name: Some("h264".to_string()),
                    width: Some(width),
                    height: Some(height),
                }],
            },
        );
        self
    }

    /// File names probed so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MediaProber for StubProber {
    async fn probe(&self, path: &Path) -> ProbeOutcome {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(name.clone());
        }
        match self.results.get(&name) {
            Some(result) => ProbeOutcome::Probed(result.clone()),
            None => ProbeOutcome::Unreadable,
        }
    }
}

/// Extractor that records requests and writes an empty file
#[derive(Default)]
pub struct StubExtractor {
    pub requests: Mutex<Vec<(PathBuf, f64, PathBuf)>>,
}

#[async_trait]
impl FrameExtractor for StubExtractor {
    async fn extract_frame(&self, input: &Path, timestamp: f64, output: &Path) -> bool {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((input.to_path_buf(), timestamp, output.to_path_buf()));
        }
        fs::write(output, b"jpg").is_ok()
    }
}

/// Create an empty file, and its parents, under `root`
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok();
    }
    fs::write(path, b"").ok();
}

/// Create a directory, and its parents, under `root`
pub fn mkdir(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel)).ok();
}
