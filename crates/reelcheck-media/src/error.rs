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

//! Error types for scan and catalog runs
//!
//! Only conditions that stop a run are errors. Per-album problems are
//! collected as report strings and unreadable media is a [`ProbeOutcome`]
//! value.
//!
//! [`ProbeOutcome`]: crate::probe::ProbeOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan errors
#[derive(Debug, Error)]
pub enum MediaError {
    /// The working folder given by the caller does not exist
    #[error("{} does not exist", .0.display())]
    WorkingFolderMissing(PathBuf),

    /// The working folder exists but is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Catalog mode requires a `video/` folder
    #[error("{} does not exist", .0.display())]
    VideoFolderMissing(PathBuf),

    /// Directory enumeration failed
    #[error("failed to read {}", path.display())]
    ReadDir {
        /// Directory being listed
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Report serialization error
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MediaError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MediaError::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, MediaError>;
