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

//! Media asset discovery, validation and cataloging for reelcheck
//!
//! This crate provides:
//! - Extension-based classification of video and audio files
//! - Discovery of numbered album directories and their media slots
//! - Metadata probing through an external inspection tool
//! - Album validation with a structured error list
//! - Clip and sample cataloging with best-effort thumbnails
//! - JSON report records

pub mod catalog;
pub mod classify;
pub mod error;
pub mod probe;
pub mod report;
pub mod scanner;
pub mod thumbnail;
pub mod validator;

// Re-export commonly used types
pub use catalog::{CatalogBuilder, CatalogOptions, DEFAULT_THUMBNAIL_DIR};
pub use classify::{classify, AssetKind, AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
pub use error::{MediaError, Result};
pub use probe::{FfprobeProber, MediaProber, ProbeOutcome, ProbeResult, StreamInfo};
pub use report::{
    round_seconds, AlbumRecord, AudioSample, CatalogReport, ClipRecord, Orientation,
    ValidationReport,
};
pub use thumbnail::{
    thumbnail_timestamp, FfmpegFrameExtractor, FrameExtractor, DEFAULT_THUMBNAIL_OFFSET,
    DEFAULT_THUMBNAIL_QUALITY,
};
pub use validator::{AlbumValidator, SlotOutcome};
