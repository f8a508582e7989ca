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


//! reelcheck Observability Module
//!
//! Structured logging for the reelcheck crates.
//!
//! # Features
//!
//! - **Multiple Output Formats**: Pretty, JSON, and compact output formats
//! - **Environment-based Filtering**: Dynamic log level control via `RUST_LOG`
//! - **Stderr only**: standard output stays free for reports
//!
//! # Example
//!
//! ```no_run
//! use reelcheck_observability::{init_tracing, LogFormat};
//!
//! init_tracing(LogFormat::Pretty, None).unwrap();
//! tracing::warn!("Application started");
//! ```

pub mod config;
pub mod initialization;

pub use config::{LogConfig, LogError, LogFormat, DEFAULT_LOG_LEVEL};
pub use initialization::{init_tracing, init_tracing_with_config};
