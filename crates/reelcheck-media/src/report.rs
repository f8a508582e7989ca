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

//! Report records and the final report objects
//!
//! Reports are built once at the end of a run and serialized as a single
//! JSON document. Field order here is the output field order.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Round seconds to two decimals, ties to even (`0.125` becomes `0.12`)
pub fn round_seconds(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Validation result for one album directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    /// Album directory basename, e.g. `01_intro`
    pub album_dir: String,

    /// Album directory path
    pub path: String,

    /// Resolved video file
    pub video_file: Option<String>,

    /// Resolved audio file
    pub audio_file: Option<String>,

    /// Video duration in seconds, rounded to 2 decimals
    pub video_duration: Option<f64>,

    /// Audio duration in seconds, rounded to 2 decimals
    pub audio_duration: Option<f64>,

    /// True iff both slots resolved with a readable duration
    pub valid: bool,
}

impl AlbumRecord {
    /// Fresh record; validation clears `valid` as slots fail
    pub fn new(album_dir: impl Into<String>, path: impl Into<String>) -> Self {
        AlbumRecord {
            album_dir: album_dir.into(),
            path: path.into(),
            video_file: None,
            audio_file: None,
            video_duration: None,
            audio_duration: None,
            valid: true,
        }
    }
}

/// Frame orientation of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    Portrait,

    /// Wider than tall, or square
    Landscape,
}

impl Orientation {
    /// Portrait iff height > width; ties are landscape
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Cataloged video clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRecord {
    /// File name
    pub filename: String,

    /// File path
    pub path: String,

    /// Duration in seconds, rounded to 2 decimals
    pub duration: f64,

    /// Video stream width
    pub width: u32,

    /// Video stream height
    pub height: u32,

    /// Requested thumbnail location; `None` when thumbnails are disabled
    pub thumbnail_path: Option<String>,

    /// Derived from width and height
    pub orientation: Orientation,
}

/// Cataloged audio sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSample {
    /// File name
    pub filename: String,

    /// File path
    pub path: String,

    /// Duration in seconds, rounded to 2 decimals
    pub duration: f64,
}

/// Output of validation mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Working folder as given
    pub working_folder: String,

    /// Number of album directories found
    pub total_albums: usize,

    /// Number of albums with both slots resolved
    pub valid_albums: usize,

    /// Structural errors in discovery order
    pub errors: Vec<String>,

    /// Per-album records in name order
    pub albums: Vec<AlbumRecord>,
}

impl ValidationReport {
    /// Assemble the report from per-album results
    pub fn assemble(
        working_folder: impl Into<String>,
        albums: Vec<AlbumRecord>,
        errors: Vec<String>,
    ) -> Self {
        let valid_albums = albums.iter().filter(|a| a.valid).count();
        ValidationReport {
            working_folder: working_folder.into(),
            total_albums: albums.len(),
            valid_albums,
            errors,
            albums,
        }
    }

    /// A run succeeds iff no error was recorded
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }
}

/// Output of catalog mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogReport {
    /// Working folder as given
    pub working_folder: String,

    /// Readable clips in name order
    pub video_clips: Vec<ClipRecord>,

    /// Readable audio samples in name order
    pub audio_samples: Vec<AudioSample>,

    /// Number of cataloged clips
    pub total_video_clips: usize,

    /// Sum of the clips' rounded durations
    pub total_video_duration: f64,

    /// Number of cataloged audio samples
    pub total_audio_samples: usize,

    /// Sum of the samples' rounded durations
    pub total_audio_duration: f64,
}

impl CatalogReport {
    /// Assemble the report and compute totals.
    ///
    /// Totals are sums of already rounded per-item durations, rounded again.
    pub fn assemble(
        working_folder: impl Into<String>,
        video_clips: Vec<ClipRecord>,
        audio_samples: Vec<AudioSample>,
    ) -> Self {
        let total_video_duration = round_seconds(video_clips.iter().map(|c| c.duration).sum());
        let total_audio_duration = round_seconds(audio_samples.iter().map(|a| a.duration).sum());
        CatalogReport {
            working_folder: working_folder.into(),
            total_video_clips: video_clips.len(),
            total_audio_samples: audio_samples.len(),
            video_clips,
            audio_samples,
            total_video_duration,
            total_audio_duration,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
