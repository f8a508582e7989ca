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


//! # reelcheck Test Utilities
//!
//! Shared test utilities for reelcheck crates providing:
//! - CLI command helpers for testing the reelcheck binary
//! - Working-folder fixtures with self-describing media files
//! - Fake media tools standing in for ffprobe and ffmpeg
//! - Assertions over the JSON reports

pub mod assertions;
pub mod cli;
pub mod fixtures;
#[cfg(unix)]
pub mod tools;

// Re-export commonly used items at crate root
pub use assertions::*;
pub use cli::{reelcheck, ReelcheckCommand};
pub use fixtures::{ProbeJson, WorkingFolder};
#[cfg(unix)]
pub use tools::FakeTools;
