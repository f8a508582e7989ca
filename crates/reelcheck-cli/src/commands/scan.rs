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


//! Scan command - album folder validation

use super::CommandContext;
use crate::output;
use anyhow::Result;
use clap::Parser;
use reelcheck_media::{AlbumValidator, FfprobeProber, ValidationReport};
use std::path::PathBuf;

/// Validate the album folders of a working folder
///
/// Every direct subfolder whose name starts with two digits and an
/// underscore is an album. Each album must contain a video/ folder with
/// exactly one readable video file and an audio/ folder with exactly one
/// readable audio file.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    # Validate all albums, pretty JSON on stdout
    reelcheck scan ./project

    # Single-line JSON, no summary
    reelcheck scan ./project --compact -q

EXIT STATUS:
    0  every album is valid (or there are no albums)
    1  the folder is missing, or at least one error was reported")]
pub struct ScanCmd {
    /// Working folder containing NN_* album folders
    #[arg(value_name = "WORKING_FOLDER")]
    pub working_folder: PathBuf,
}

impl ScanCmd {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if !ctx.quiet {
            output::header(&format!(
                "Scanning albums in {}",
                self.working_folder.display()
            ));
        }

        let prober = FfprobeProber::new(&ctx.config.tools.ffprobe);
        let report = AlbumValidator::new(&prober)
            .validate_folder(&self.working_folder)
            .await?;

        println!("{}", report.to_json(ctx.pretty)?);

        if !ctx.quiet {
            self.display_summary(&report);
        }

        if !report.is_success() {
            anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
        }

        Ok(())
    }

    fn display_summary(&self, report: &ValidationReport) {
        output::detail("Albums", &report.total_albums.to_string());
        output::detail("Valid", &report.valid_albums.to_string());

        if report.is_success() {
            output::success(&format!("All {} album(s) are valid", report.total_albums));
        } else {
            for message in &report.errors {
                output::warning(message);
            }
        }
    }
}
