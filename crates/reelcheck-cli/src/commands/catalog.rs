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


//! Catalog command - clip and sample inventory

use super::CommandContext;
use crate::output;
use anyhow::Result;
use clap::Parser;
use reelcheck_media::{
    CatalogBuilder, CatalogOptions, CatalogReport, FfmpegFrameExtractor, FfprobeProber,
};
use std::path::PathBuf;

/// Catalog the clips in video/ and the samples in audio/
///
/// Unreadable files are left out of the catalog without an error. A
/// thumbnail is extracted for each clip unless disabled.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    # Catalog with thumbnails in ./project/.thumbnails
    reelcheck catalog ./project

    # Catalog without extracting thumbnails
    reelcheck catalog ./project --no-thumbnails")]
pub struct CatalogCmd {
    /// Working folder containing video/ and optionally audio/
    #[arg(value_name = "WORKING_FOLDER")]
    pub working_folder: PathBuf,

    /// Do not extract thumbnails
    #[arg(long)]
    pub no_thumbnails: bool,
}

impl CatalogCmd {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if !ctx.quiet {
            output::header(&format!(
                "Cataloging media in {}",
                self.working_folder.display()
            ));
        }

        let catalog = &ctx.config.catalog;
        let prober = FfprobeProber::new(&ctx.config.tools.ffprobe);
        let extractor = FfmpegFrameExtractor::new(&ctx.config.tools.ffmpeg)
            .with_quality(catalog.thumbnail_quality);
        let options = CatalogOptions {
            thumbnails: catalog.thumbnails && !self.no_thumbnails,
            thumbnail_dir: catalog.thumbnail_dir.clone(),
            thumbnail_offset: catalog.thumbnail_offset_seconds,
        };

        let report = CatalogBuilder::new(&prober, &extractor)
            .with_options(options)
            .build(&self.working_folder)
            .await?;

        println!("{}", report.to_json(ctx.pretty)?);

        if !ctx.quiet {
            display_summary(&report);
        }

        Ok(())
    }
}

fn display_summary(report: &CatalogReport) {
    output::detail(
        "Video clips",
        &format!(
            "{} ({:.2}s)",
            report.total_video_clips, report.total_video_duration
        ),
    );
    output::detail(
        "Audio samples",
        &format!(
            "{} ({:.2}s)",
            report.total_audio_samples, report.total_audio_duration
        ),
    );
    output::success("Catalog complete");
}
