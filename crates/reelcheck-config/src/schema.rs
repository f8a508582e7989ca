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


use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Catalog mode settings
    pub catalog: CatalogConfig,

    /// Report output settings
    pub output: OutputConfig,

    /// Logging settings
    pub observability: ObservabilityConfig,
}

/// Executables used for media inspection and frame extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolsConfig {
    /// Media inspection tool, a name on `PATH` or a full path
    #[serde(default = "default_ffprobe")]
    pub ffprobe: String,

    /// Media transcoding tool, a name on `PATH` or a full path
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

/// Catalog mode configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Extract a thumbnail per clip
    #[serde(default = "default_true")]
    pub thumbnails: bool,

    /// Thumbnail directory, relative to the working folder
    #[serde(default = "default_thumbnail_dir")]
    pub thumbnail_dir: String,

    /// Cap on the thumbnail timestamp, in seconds
    #[serde(default = "default_thumbnail_offset")]
    pub thumbnail_offset_seconds: f64,

    /// JPEG quality (1 best .. 31 worst)
    #[serde(default = "default_thumbnail_quality")]
    pub thumbnail_quality: u8,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Indent the JSON report
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservabilityConfig {
    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_true() -> bool {
    true
}

fn default_ffprobe() -> String {
    "ffprobe".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

fn default_thumbnail_dir() -> String {
    ".thumbnails".to_string()
}

fn default_thumbnail_offset() -> f64 {
    1.0
}

fn default_thumbnail_quality() -> u8 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            ffprobe: default_ffprobe(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            thumbnails: true,
            thumbnail_dir: default_thumbnail_dir(),
            thumbnail_offset_seconds: default_thumbnail_offset(),
            thumbnail_quality: default_thumbnail_quality(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { pretty: true }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
