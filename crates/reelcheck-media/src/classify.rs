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

//! Extension classification
//!
//! One table of accepted extensions per asset kind, shared by album
//! validation and catalog mode. Matching is always case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Accepted video container extensions, lowercase with leading dot.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".mkv", ".m4v"];

/// Accepted audio extensions, lowercase with leading dot.
pub const AUDIO_EXTENSIONS: &[&str] = &[".m4a", ".mp3", ".wav", ".aac", ".flac", ".ogg"];

/// Kind of asset, which is also the name of the slot subfolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Video clip, lives under `video/`
    Video,

    /// Audio track, lives under `audio/`
    Audio,
}

impl AssetKind {
    /// Both kinds in slot evaluation order
    pub const ALL: [AssetKind; 2] = [AssetKind::Video, AssetKind::Audio];

    /// Subfolder name (and slot name) for this kind
    pub fn subfolder(&self) -> &'static str {
        match self {
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
        }
    }

    /// Accepted extensions for this kind
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Video => VIDEO_EXTENSIONS,
            AssetKind::Audio => AUDIO_EXTENSIONS,
        }
    }

    /// Sorted, comma-separated extension list used in error messages
    pub fn accepted_list(&self) -> String {
        let mut exts = self.extensions().to_vec();
        exts.sort_unstable();
        exts.join(", ")
    }

    /// Whether `path` has an extension accepted for this kind
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| classify(&format!(".{ext}"), *self))
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subfolder())
    }
}

/// Check an extension (with leading dot) against the table for `kind`.
///
/// Unknown extensions are simply not matched.
pub fn classify(extension: &str, kind: AssetKind) -> bool {
    let lowered = extension.to_ascii_lowercase();
    kind.extensions().contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert!(classify(".mp4", AssetKind::Video));
        assert!(classify(".MP4", AssetKind::Video));
        assert!(classify(".MkV", AssetKind::Video));
        assert!(classify(".FLAC", AssetKind::Audio));
    }

    #[test]
    fn test_kinds_do_not_overlap() {
        for ext in VIDEO_EXTENSIONS {
            assert!(!classify(ext, AssetKind::Audio), "{ext} matched audio");
        }
        for ext in AUDIO_EXTENSIONS {
            assert!(!classify(ext, AssetKind::Video), "{ext} matched video");
        }
    }

    #[test]
    fn test_unknown_extension_excluded() {
        assert!(!classify(".txt", AssetKind::Video));
        assert!(!classify("", AssetKind::Audio));
        assert!(!classify("mp4", AssetKind::Video));
    }

    #[test]
    fn test_matches_path() {
        assert!(AssetKind::Video.matches_path(Path::new("clips/a.MOV")));
        assert!(AssetKind::Audio.matches_path(Path::new("song.m4a")));
        assert!(!AssetKind::Audio.matches_path(Path::new("notes")));
        assert!(!AssetKind::Video.matches_path(Path::new(".mp4")));
    }

    #[test]
    fn test_accepted_list_sorted() {
        assert_eq!(AssetKind::Video.accepted_list(), ".avi, .m4v, .mkv, .mov, .mp4");
        assert_eq!(
            AssetKind::Audio.accepted_list(),
            ".aac, .flac, .m4a, .mp3, .ogg, .wav"
        );
    }

    #[test]
    fn test_display_is_subfolder_name() {
        assert_eq!(AssetKind::Video.to_string(), "video");
        assert_eq!(AssetKind::Audio.to_string(), "audio");
    }
}
