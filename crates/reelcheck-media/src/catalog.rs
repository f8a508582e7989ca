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

//! Catalog mode
//!
//! Describes every clip under `video/` and every sample under `audio/` of a
//! flat working folder. Nothing here is a validation gate: unreadable files
//! are dropped from the catalog without an error, thumbnail failures are
//! ignored, and a clip whose duration is missing is cataloged as `0.0`.
//! Album validation treats the same situations as hard errors.

use crate::classify::AssetKind;
use crate::error::{MediaError, Result};
use crate::probe::{MediaProber, ProbeOutcome};
use crate::report::{round_seconds, AudioSample, CatalogReport, ClipRecord, Orientation};
use crate::scanner;
use crate::thumbnail::{thumbnail_timestamp, FrameExtractor, DEFAULT_THUMBNAIL_OFFSET};
use crate::validator::{display, file_name};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Name of the thumbnail directory created inside the working folder
pub const DEFAULT_THUMBNAIL_DIR: &str = ".thumbnails";

/// Catalog behaviour knobs
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOptions {
    /// Extract a thumbnail for every cataloged clip
    pub thumbnails: bool,

    /// Thumbnail directory, relative to the working folder
    pub thumbnail_dir: String,

    /// Upper bound for the sampling timestamp, in seconds
    pub thumbnail_offset: f64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            thumbnails: true,
            thumbnail_dir: DEFAULT_THUMBNAIL_DIR.to_string(),
            thumbnail_offset: DEFAULT_THUMBNAIL_OFFSET,
        }
    }
}

/// Builds a [`CatalogReport`] for a flat `video/` + `audio/` folder
pub struct CatalogBuilder<'a> {
    prober: &'a dyn MediaProber,
    extractor: &'a dyn FrameExtractor,
    options: CatalogOptions,
}

impl<'a> CatalogBuilder<'a> {
    /// Create a builder with default options
    pub fn new(prober: &'a dyn MediaProber, extractor: &'a dyn FrameExtractor) -> Self {
        CatalogBuilder {
            prober,
            extractor,
            options: CatalogOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    /// Catalog `working_folder`.
    ///
    /// Fails only when `video/` is absent or a folder cannot be listed.
    #[instrument(skip_all, fields(working_folder = %working_folder.display()))]
    pub async fn build(&self, working_folder: &Path) -> Result<CatalogReport> {
        let video_folder = working_folder.join(AssetKind::Video.subfolder());
        if !scanner::is_dir(&video_folder).await {
            return Err(MediaError::VideoFolderMissing(video_folder));
        }

        let thumb_dir = if self.options.thumbnails {
            self.prepare_thumbnail_dir(working_folder).await
        } else {
            None
        };

        let mut clips = Vec::new();
        for clip in scanner::scan(&video_folder, AssetKind::Video).await? {
            if let Some(record) = self.catalog_clip(&clip, thumb_dir.as_deref()).await {
                clips.push(record);
            }
        }

        let mut samples = Vec::new();
        let audio_folder = working_folder.join(AssetKind::Audio.subfolder());
        if scanner::is_dir(&audio_folder).await {
            for sample in scanner::scan(&audio_folder, AssetKind::Audio).await? {
                if let Some(record) = self.catalog_sample(&sample).await {
                    samples.push(record);
                }
            }
        }

        let report = CatalogReport::assemble(display(working_folder), clips, samples);
        info!(
            "Cataloged {} clip(s) ({:.2}s) and {} audio sample(s) ({:.2}s)",
            report.total_video_clips,
            report.total_video_duration,
            report.total_audio_samples,
            report.total_audio_duration
        );
        Ok(report)
    }

    /// Probe one clip and request its thumbnail. `None` drops the clip.
    pub async fn catalog_clip(&self, clip: &Path, thumb_dir: Option<&Path>) -> Option<ClipRecord> {
        let result = match self.prober.probe(clip).await {
            ProbeOutcome::Probed(result) => result,
            ProbeOutcome::Unreadable => {
                debug!("Skipping unreadable clip {}", clip.display());
                return None;
            }
        };

        // Suspect: an absent or non-numeric duration on a successful probe is
        // cataloged as 0.0 rather than dropped. Kept as-is.
        let duration = result.duration_seconds.unwrap_or(0.0);
        let (width, height) = result.dimensions();

        let thumbnail_path = match thumb_dir {
            Some(dir) => {
                let target = thumbnail_target(dir, clip);
                let timestamp = thumbnail_timestamp(duration, self.options.thumbnail_offset);
                if !self.extractor.extract_frame(clip, timestamp, &target).await {
                    debug!("No thumbnail for {}", clip.display());
                }
                Some(display(&target))
            }
            None => None,
        };

        Some(ClipRecord {
            filename: file_name(clip),
            path: display(clip),
            duration: round_seconds(duration),
            width,
            height,
            thumbnail_path,
            orientation: Orientation::from_dimensions(width, height),
        })
    }

    /// Probe one audio sample. `None` drops the sample.
    pub async fn catalog_sample(&self, sample: &Path) -> Option<AudioSample> {
        let result = self.prober.probe(sample).await.into_result()?;
        Some(AudioSample {
            filename: file_name(sample),
            path: display(sample),
            duration: round_seconds(result.duration_seconds.unwrap_or(0.0)),
        })
    }

    async fn prepare_thumbnail_dir(&self, working_folder: &Path) -> Option<PathBuf> {
        let dir = working_folder.join(&self.options.thumbnail_dir);
        match tokio::fs::create_dir_all(&dir).await {
            Ok(()) => Some(dir),
            Err(e) => {
                warn!(
                    "Cannot create thumbnail directory {}: {}; continuing without thumbnails",
                    dir.display(),
                    e
                );
                None
            }
        }
    }
}

/// `<dir>/<clip stem>.jpg`
pub fn thumbnail_target(dir: &Path, clip: &Path) -> PathBuf {
    let stem = clip
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{stem}.jpg"))
}
