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

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use commands::*;
use reelcheck_config::{Config, ConfigLoader};
use reelcheck_observability::{init_tracing, LogFormat};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelcheck")]
#[command(version, about = "Validate album folders and catalog media clips")]
#[command(
    long_about = "reelcheck checks that every numbered album folder holds exactly one readable
video and one readable audio file, and catalogs the clips and samples of a flat
video/ + audio/ folder. Reports are printed to stdout as a single JSON document."
)]
#[command(propagate_version = true)]
#[command(author = "reelcheck contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress logs and the summary on stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log format (pretty|compact|json)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Print the report as single-line JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every NN_* album folder of a working folder
    Scan(ScanCmd),

    /// Catalog the clips and audio samples of a working folder
    Catalog(CatalogCmd),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli).await {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .load_with_overrides(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    if !cli.quiet {
        init_logging(&cli, &config)?;
    }

    let ctx = CommandContext {
        pretty: config.output.pretty && !cli.compact,
        quiet: cli.quiet,
        config,
    };

    match cli.command {
        Commands::Scan(cmd) => cmd.execute(&ctx).await,
        Commands::Catalog(cmd) => cmd.execute(&ctx).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

/// `-v` wins, then `RUST_LOG`, then the configured level.
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let format = match cli.log_format {
        Some(format) => format,
        None => config
            .observability
            .log_format
            .parse()
            .context("Invalid observability.log_format")?,
    };

    let level = if cli.verbose {
        Some("debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        None
    } else {
        Some(config.observability.log_level.as_str())
    };

    init_tracing(format, level).context("Failed to initialize logging")?;
    Ok(())
}

fn print_version() {
    println!("reelcheck {}", env!("CARGO_PKG_VERSION"));
    println!("rust-version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("license: {}", env!("CARGO_PKG_LICENSE"));
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "reelcheck", &mut io::stdout());
}
