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

//! Media metadata probing
//!
//! Probing is delegated to an external inspection tool (ffprobe). Its JSON
//! output is validated once here and turned into a [`ProbeResult`]; callers
//! never look at raw JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use reelcheck_media::probe::{FfprobeProber, MediaProber, ProbeOutcome};
//! use std::path::Path;
//!
//! # async fn example() {
//! let prober = FfprobeProber::new("ffprobe");
//! match prober.probe(Path::new("clip.mp4")).await {
//!     ProbeOutcome::Probed(result) => println!("{:?}", result.duration_seconds),
//!     ProbeOutcome::Unreadable => println!("unreadable"),
//! }
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// One stream reported by the inspection tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Stream kind, e.g. `video` or `audio`
    #[serde(default)]
    pub codec_type: Option<String>,

    /// Codec name, e.g. `h264`
    #[serde(default)]
    pub codec_name: Option<String>,

    /// Frame width (video streams only)
    #[serde(default)]
    pub width: Option<u32>,

    /// Frame height (video streams only)
    #[serde(default)]
    pub height: Option<u32>,
}

/// Metadata snapshot for one file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeResult {
    /// Container duration in seconds; `None` when absent or not numeric
    pub duration_seconds: Option<f64>,

    /// Streams in container order
    pub streams: Vec<StreamInfo>,
}

impl ProbeResult {
    /// First video stream, if any
    pub fn video_stream(&self) -> Option<&StreamInfo> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
    }

    /// Width and height of the first video stream, `(0, 0)` when missing
    pub fn dimensions(&self) -> (u32, u32) {
        self.video_stream()
            .map(|s| (s.width.unwrap_or(0), s.height.unwrap_or(0)))
            .unwrap_or((0, 0))
    }

    /// Codec type of the primary stream (video preferred)
    pub fn codec_type(&self) -> Option<&str> {
        self.video_stream()
            .or_else(|| self.streams.first())
            .and_then(|s| s.codec_type.as_deref())
    }
}

/// Outcome of a single probe
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The tool answered with parseable metadata
    Probed(ProbeResult),

    /// The tool failed, could not be started, or printed garbage
    Unreadable,
}

impl ProbeOutcome {
    /// Metadata if the probe succeeded
    pub fn into_result(self) -> Option<ProbeResult> {
        match self {
            ProbeOutcome::Probed(result) => Some(result),
            ProbeOutcome::Unreadable => None,
        }
    }
}

/// Access to a media inspection capability
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Inspect one file. Never retried by callers.
    async fn probe(&self, path: &Path) -> ProbeOutcome;

    /// Duration in seconds, or `None` when unreadable or not numeric
    async fn duration(&self, path: &Path) -> Option<f64> {
        self.probe(path)
            .await
            .into_result()
            .and_then(|r| r.duration_seconds)
    }
}

/// Prober backed by the `ffprobe` executable
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: PathBuf,
}

impl FfprobeProber {
    /// Create a prober that runs `program` (a name on `PATH` or a full path)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        FfprobeProber {
            program: program.into(),
        }
    }

    /// Executable this prober runs
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[instrument(skip_all, fields(path = %path.display()))]
    async fn probe(&self, path: &Path) -> ProbeOutcome {
        let output = Command::new(&self.program)
            .args(build_ffprobe_args(path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute {}: {}", self.program.display(), e);
                return ProbeOutcome::Unreadable;
            }
        };

        if !output.status.success() {
            debug!("ffprobe exited with {}", output.status);
            return ProbeOutcome::Unreadable;
        }

        match parse_ffprobe_json(&output.stdout) {
            Some(result) => {
                debug!(
                    "Probed: duration={:?}, streams={}",
                    result.duration_seconds,
                    result.streams.len()
                );
                ProbeOutcome::Probed(result)
            }
            None => {
                debug!("ffprobe output was not valid JSON");
                ProbeOutcome::Unreadable
            }
        }
    }
}

/// Arguments requesting container duration and per-stream geometry as JSON
pub fn build_ffprobe_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "quiet",
        "-show_entries",
        "format=duration:stream=width,height,codec_name,codec_type",
        "-of",
        "json",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(path.as_os_str().to_owned());
    args
}

/// Parse ffprobe JSON output. `None` means the output is not usable at all.
///
/// Only malformed JSON (or a top-level value that is not an object) is
/// unusable. Fields with unexpected types are read as absent.
pub fn parse_ffprobe_json(bytes: &[u8]) -> Option<ProbeResult> {
    let raw: Value = serde_json::from_slice(bytes).ok()?;
    let raw = raw.as_object()?;

    let duration_seconds = raw
        .get("format")
        .and_then(|f| f.get("duration"))
        .and_then(parse_duration);

    let streams = raw
        .get("streams")
        .and_then(Value::as_array)
        .map(|streams| streams.iter().map(parse_stream).collect())
        .unwrap_or_default();

    Some(ProbeResult {
        duration_seconds,
        streams,
    })
}

fn parse_stream(value: &Value) -> StreamInfo {
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
    let size = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    StreamInfo {
        codec_type: text("codec_type"),
        codec_name: text("codec_name"),
        width: size("width"),
        height: size("height"),
    }
}

/// ffprobe reports durations as strings ("12.480000"), or "N/A".
fn parse_duration(value: &Value) -> Option<f64> {
    let seconds = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    seconds.is_finite().then_some(seconds)
}
