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

//! Best-effort still-frame extraction for catalog thumbnails

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Default cap on the sampling offset, in seconds
pub const DEFAULT_THUMBNAIL_OFFSET: f64 = 1.0;

/// Default JPEG quality passed to ffmpeg (`-q:v`, 1 best .. 31 worst)
pub const DEFAULT_THUMBNAIL_QUALITY: u8 = 3;

/// Timestamp to sample: `min(cap, duration / 2)`.
///
/// Short clips are sampled at their midpoint so the seek never overruns
/// the end of the file.
pub fn thumbnail_timestamp(duration: f64, cap: f64) -> f64 {
    cap.min(duration / 2.0)
}

/// Access to a media transcoding capability
#[async_trait]
pub trait FrameExtractor: Send + Sync {
    /// Write one frame of `input` at `timestamp` seconds to `output`.
    ///
    /// Returns whether the frame was written. Failures are never fatal.
    async fn extract_frame(&self, input: &Path, timestamp: f64, output: &Path) -> bool;
}

/// Frame extractor backed by the `ffmpeg` executable
#[derive(Debug, Clone)]
pub struct FfmpegFrameExtractor {
    program: PathBuf,
    quality: u8,
}

impl FfmpegFrameExtractor {
    /// Create an extractor that runs `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        FfmpegFrameExtractor {
            program: program.into(),
            quality: DEFAULT_THUMBNAIL_QUALITY,
        }
    }

    /// Set the JPEG quality
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    fn build_args(&self, input: &Path, timestamp: f64, output: &Path) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-ss".into(),
            timestamp.to_string().into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            "-frames:v".into(),
            "1".into(),
            "-q:v".into(),
            self.quality.to_string().into(),
            output.as_os_str().to_owned(),
        ]
    }
}

impl Default for FfmpegFrameExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl FrameExtractor for FfmpegFrameExtractor {
    #[instrument(skip_all, fields(timestamp = timestamp, input = %input.display(), output = %output.display()))]
    async fn extract_frame(&self, input: &Path, timestamp: f64, output: &Path) -> bool {
        let status = Command::new(&self.program)
            .args(self.build_args(input, timestamp, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => {
                debug!("Thumbnail written at {:.2}s", timestamp);
                true
            }
            Ok(status) => {
                warn!("Thumbnail extraction exited with {}", status);
                false
            }
            Err(e) => {
                warn!("Failed to execute {}: {}", self.program.display(), e);
                false
            }
        }
    }
}
