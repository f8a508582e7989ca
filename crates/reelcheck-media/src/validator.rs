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

//! Album validation
//!
//! Every album directory must hold exactly one accepted video file under
//! `video/` and exactly one accepted audio file under `audio/`, each with a
//! readable duration. Both slots of every album are always evaluated, and
//! every problem becomes one human-readable error string. Validation never
//! stops early; only a missing working folder aborts the run.
//!
//! This mode is strict: a file whose duration cannot be read is an error.
//! Catalog mode deliberately tolerates the same file (see [`crate::catalog`]).

use crate::classify::AssetKind;
use crate::error::Result;
use crate::probe::MediaProber;
use crate::report::{round_seconds, AlbumRecord, ValidationReport};
use crate::scanner;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Terminal state of one slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOutcome {
    /// The slot subfolder does not exist
    MissingSubfolder,

    /// The subfolder holds no accepted file
    NoFiles,

    /// The subfolder holds two or more accepted files (names in scan order)
    TooManyFiles(Vec<String>),

    /// The single file could not be probed for a duration
    Unreadable(String),

    /// The single file and its duration, rounded to 2 decimals
    Resolved {
        /// Resolved file
        file: PathBuf,
        /// Rounded duration in seconds
        duration: f64,
    },
}

impl SlotOutcome {
    /// Whether the slot resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, SlotOutcome::Resolved { .. })
    }

    /// Report error line for a failed slot; `None` when resolved
    pub fn error_message(&self, album: &str, kind: AssetKind) -> Option<String> {
        match self {
            SlotOutcome::MissingSubfolder => Some(format!("{album}: missing {kind}/ subfolder")),
            SlotOutcome::NoFiles => Some(format!(
                "{album}/{kind}/: no {kind} file found (accepted: {})",
                kind.accepted_list()
            )),
            SlotOutcome::TooManyFiles(names) => Some(format!(
                "{album}/{kind}/: expected 1 {kind} file, found {}: {}",
                names.len(),
                names.join(", ")
            )),
            SlotOutcome::Unreadable(name) => {
                Some(format!("{album}/{kind}/{name}: ffprobe could not read file"))
            }
            SlotOutcome::Resolved { .. } => None,
        }
    }
}

/// Validates album directories against the one-video-one-audio contract
pub struct AlbumValidator<'a> {
    prober: &'a dyn MediaProber,
}

impl<'a> AlbumValidator<'a> {
    /// Create a validator that probes through `prober`
    pub fn new(prober: &'a dyn MediaProber) -> Self {
        AlbumValidator { prober }
    }

    /// Validate every album directory in `working_folder`.
    ///
    /// Fails only when the working folder is missing or unreadable.
    #[instrument(skip_all, fields(working_folder = %working_folder.display()))]
    pub async fn validate_folder(&self, working_folder: &Path) -> Result<ValidationReport> {
        let album_dirs = scanner::album_dirs(working_folder).await?;
        info!("Validating {} album(s)", album_dirs.len());

        let mut errors = Vec::new();
        let mut albums = Vec::with_capacity(album_dirs.len());
        for album_dir in &album_dirs {
            albums.push(self.validate_album(album_dir, &mut errors).await?);
        }

        let report = ValidationReport::assemble(display(working_folder), albums, errors);
        info!(
            "Validation finished: {}/{} album(s) valid, {} error(s)",
            report.valid_albums,
            report.total_albums,
            report.errors.len()
        );
        Ok(report)
    }

    /// Validate one album, appending its error lines to `errors`.
    #[instrument(skip_all, fields(album = %album_dir.display()))]
    pub async fn validate_album(
        &self,
        album_dir: &Path,
        errors: &mut Vec<String>,
    ) -> Result<AlbumRecord> {
        let album_name = file_name(album_dir);
        let mut record = AlbumRecord::new(album_name.clone(), display(album_dir));

        for kind in AssetKind::ALL {
            let outcome = self.resolve_slot(album_dir, kind).await?;
            if let Some(message) = outcome.error_message(&album_name, kind) {
                warn!("{}", message);
                errors.push(message);
                record.valid = false;
                continue;
            }
            if let SlotOutcome::Resolved { file, duration } = outcome {
                let file = display(&file);
                match kind {
                    AssetKind::Video => {
                        record.video_file = Some(file);
                        record.video_duration = Some(duration);
                    }
                    AssetKind::Audio => {
                        record.audio_file = Some(file);
                        record.audio_duration = Some(duration);
                    }
                }
            }
        }

        debug!("Album {} valid={}", album_name, record.valid);
        Ok(record)
    }

    /// Resolve one slot of one album to its terminal state
    pub async fn resolve_slot(&self, album_dir: &Path, kind: AssetKind) -> Result<SlotOutcome> {
        let folder = album_dir.join(kind.subfolder());
        if !scanner::is_dir(&folder).await {
            return Ok(SlotOutcome::MissingSubfolder);
        }

        let mut files = scanner::scan(&folder, kind).await?;
        let file = match files.len() {
            0 => return Ok(SlotOutcome::NoFiles),
            1 => files.remove(0),
            _ => {
                return Ok(SlotOutcome::TooManyFiles(
                    files.iter().map(|f| file_name(f)).collect(),
                ))
            }
        };

        Ok(match self.prober.duration(&file).await {
            Some(duration) => SlotOutcome::Resolved {
                file,
                duration: round_seconds(duration),
            },
            None => SlotOutcome::Unreadable(file_name(&file)),
        })
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub(crate) fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::probe::{ProbeOutcome, ProbeResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// Durations by file name; anything else is unreadable.
    struct FixedProber(HashMap<String, f64>);

    #[async_trait]
    impl MediaProber for FixedProber {
        async fn probe(&self, path: &Path) -> ProbeOutcome {
            match self.0.get(&file_name(path)) {
                Some(d) => ProbeOutcome::Probed(ProbeResult {
                    duration_seconds: Some(*d),
                    streams: vec![],
                }),
                None => ProbeOutcome::Unreadable,
            }
        }
    }

    fn prober(entries: &[(&str, f64)]) -> FixedProber {
        FixedProber(entries.iter().map(|(n, d)| (n.to_string(), *d)).collect())
    }

    fn put(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_error_messages() {
        let kind = AssetKind::Video;
        assert_eq!(
            SlotOutcome::MissingSubfolder.error_message("01_a", kind).unwrap(),
            "01_a: missing video/ subfolder"
        );
        assert_eq!(
            SlotOutcome::NoFiles.error_message("01_a", AssetKind::Audio).unwrap(),
            "01_a/audio/: no audio file found (accepted: .aac, .flac, .m4a, .mp3, .ogg, .wav)"
        );
        assert_eq!(
            SlotOutcome::TooManyFiles(vec!["a.mp4".into(), "b.mov".into()])
                .error_message("01_a", kind)
                .unwrap(),
            "01_a/video/: expected 1 video file, found 2: a.mp4, b.mov"
        );
        assert_eq!(
            SlotOutcome::Unreadable("a.mp4".into()).error_message("01_a", kind).unwrap(),
            "01_a/video/a.mp4: ffprobe could not read file"
        );
        let resolved = SlotOutcome::Resolved {
            file: PathBuf::from("a.mp4"),
            duration: 1.0,
        };
        assert!(resolved.is_resolved());
        assert!(resolved.error_message("01_a", kind).is_none());
    }

    #[tokio::test]
    async fn test_valid_album() {
        let temp = TempDir::new().unwrap();
        put(temp.path(), "01_a/video/clip.mp4");
        put(temp.path(), "01_a/audio/song.mp3");
        let prober = prober(&[("clip.mp4", 12.3456), ("song.mp3", 201.0)]);

        let mut errors = Vec::new();
        let record = AlbumValidator::new(&prober)
            .validate_album(&temp.path().join("01_a"), &mut errors)
            .await
            .unwrap();

        assert!(errors.is_empty());
        assert!(record.valid);
        assert_eq!(record.album_dir, "01_a");
        assert_eq!(record.video_duration, Some(12.35));
        assert_eq!(record.audio_duration, Some(201.0));
        assert!(record.video_file.unwrap().ends_with("clip.mp4"));
    }

    #[tokio::test]
    async fn test_missing_audio_still_evaluates_video() {
        let temp = TempDir::new().unwrap();
        put(temp.path(), "01_a/video/clip.mp4");
        let prober = prober(&[("clip.mp4", 5.0)]);

        let mut errors = Vec::new();
        let record = AlbumValidator::new(&prober)
            .validate_album(&temp.path().join("01_a"), &mut errors)
            .await
            .unwrap();

        assert_eq!(errors, vec!["01_a: missing audio/ subfolder"]);
        assert!(!record.valid);
        assert_eq!(record.audio_file, None);
        assert_eq!(record.video_duration, Some(5.0));
    }

    #[tokio::test]
    async fn test_both_slots_fail_independently() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("02_b/video")).unwrap();
        put(temp.path(), "02_b/audio/x.wav");
        put(temp.path(), "02_b/audio/y.ogg");
        let prober = prober(&[]);

        let mut errors = Vec::new();
        let record = AlbumValidator::new(&prober)
            .validate_album(&temp.path().join("02_b"), &mut errors)
            .await
            .unwrap();

        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("02_b/video/: no video file found"));
        assert_eq!(errors[1], "02_b/audio/: expected 1 audio file, found 2: x.wav, y.ogg");
        assert!(!record.valid);
    }

    #[tokio::test]
    async fn test_unreadable_file_is_hard_failure() {
        let temp = TempDir::new().unwrap();
        put(temp.path(), "03_c/video/broken.mkv");
        put(temp.path(), "03_c/audio/ok.flac");
        let prober = prober(&[("ok.flac", 10.0)]);

        let mut errors = Vec::new();
        let record = AlbumValidator::new(&prober)
            .validate_album(&temp.path().join("03_c"), &mut errors)
            .await
            .unwrap();

        assert_eq!(errors, vec!["03_c/video/broken.mkv: ffprobe could not read file"]);
        assert_eq!(record.video_file, None);
        assert_eq!(record.video_duration, None);
        assert_eq!(record.audio_duration, Some(10.0));
        assert!(!record.valid);
    }

    #[tokio::test]
    async fn test_slot_subfolder_that_is_a_file_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        put(temp.path(), "04_d/video");
        let prober = prober(&[]);

        let outcome = AlbumValidator::new(&prober)
            .resolve_slot(&temp.path().join("04_d"), AssetKind::Video)
            .await
            .unwrap();
        assert_eq!(outcome, SlotOutcome::MissingSubfolder);
    }

    #[tokio::test]
    async fn test_folder_report_ordering() {
        let temp = TempDir::new().unwrap();
        put(temp.path(), "02_b/video/v.mp4");
        put(temp.path(), "02_b/audio/a.mp3");
        put(temp.path(), "01_a/video/v.mp4");
        fs::create_dir_all(temp.path().join("misc")).unwrap();
        let prober = prober(&[("v.mp4", 1.0), ("a.mp3", 2.0)]);

        let report = AlbumValidator::new(&prober)
            .validate_folder(temp.path())
            .await
            .unwrap();

        assert_eq!(report.total_albums, 2);
        assert_eq!(report.valid_albums, 1);
        assert_eq!(report.albums[0].album_dir, "01_a");
        assert_eq!(report.albums[1].album_dir, "02_b");
        assert_eq!(report.errors, vec!["01_a: missing audio/ subfolder"]);
        assert_eq!(report.exit_code(), 1);
    }
}
