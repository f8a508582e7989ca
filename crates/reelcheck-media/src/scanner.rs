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

//! Directory listing for asset folders and album directories
//!
//! Every listing is sorted by file name so report order and the file order
//! inside "too many files" messages are stable across runs.

use crate::classify::AssetKind;
use crate::error::{MediaError, Result};
use regex_lite::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use tracing::{debug, instrument};

#[allow(clippy::unwrap_used)]
static ALBUM_DIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}_").unwrap());

/// Whether a directory basename names an album (`NN_anything`).
pub fn is_album_dir_name(name: &str) -> bool {
    ALBUM_DIR_PATTERN.is_match(name)
}

/// List the accepted files of `kind` directly inside `folder`.
///
/// A missing folder yields an empty list; the caller decides whether that
/// matters. Only regular files (after following symlinks) are returned.
#[instrument(skip_all, fields(folder = %folder.display(), kind = %kind))]
pub async fn scan(folder: &Path, kind: AssetKind) -> Result<Vec<PathBuf>> {
    let mut entries = match fs::read_dir(folder).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(MediaError::read_dir(folder, e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| MediaError::read_dir(folder, e))?
    {
        let path = entry.path();
        if !kind.matches_path(&path) {
            continue;
        }
        if is_file(&path).await {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} {} file(s)", files.len(), kind);
    Ok(files)
}

/// List album directories directly inside the working folder, name-sorted.
///
/// The working folder must exist; that check is fatal for the whole run.
#[instrument(skip_all, fields(working_folder = %working_folder.display()))]
pub async fn album_dirs(working_folder: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(working_folder).await?;

    let mut entries = fs::read_dir(working_folder)
        .await
        .map_err(|e| MediaError::read_dir(working_folder, e))?;

    let mut albums = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| MediaError::read_dir(working_folder, e))?
    {
        // Names that are not valid UTF-8 still count as albums
        let matched = is_album_dir_name(&entry.file_name().to_string_lossy());
        if matched && is_dir(&entry.path()).await {
            albums.push(entry.path());
        }
    }

    albums.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} album director(ies)", albums.len());
    Ok(albums)
}

/// Fail unless `path` is an existing directory.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(MediaError::NotADirectory(path.to_path_buf())),
        Err(_) => Err(MediaError::WorkingFolderMissing(path.to_path_buf())),
    }
}

pub(crate) async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_file())
}
