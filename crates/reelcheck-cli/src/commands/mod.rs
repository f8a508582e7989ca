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


// Command modules for the reelcheck CLI
pub mod catalog;
pub mod scan;

pub use catalog::CatalogCmd;
pub use scan::ScanCmd;

use reelcheck_config::Config;

/// Settings shared by every command
pub struct CommandContext {
    /// Loaded configuration with environment overrides applied
    pub config: Config,

    /// Indent the JSON report
    pub pretty: bool,

    /// Suppress the human-readable summary
    pub quiet: bool,
}
