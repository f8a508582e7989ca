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


//! Configuration for reelcheck
//!
//! Settings come from an optional TOML, YAML or JSON file with
//! `REELCHECK_*` environment variable overrides applied on top.
//!
//! # Features
//!
//! - Multi-format configuration support (TOML, YAML, JSON)
//! - Environment variable overrides with `REELCHECK_` prefix
//! - Validation with field-level error messages
//!
//! # Example
//!
//! ```no_run
//! use reelcheck_config::ConfigLoader;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = ConfigLoader::new();
//!     let config = loader
//!         .load_with_overrides(Some(Path::new("reelcheck.toml")))
//!         .await?;
//!
//!     println!("Probing with: {}", config.tools.ffprobe);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export commonly used items
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ConfigFormat, ConfigLoader, ENV_FFMPEG, ENV_FFPROBE, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    ENV_THUMBNAILS,
};
pub use schema::*;
pub use validation::{Validator, LOG_FORMATS, LOG_LEVELS};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[catalog]"));
        let parsed = ConfigLoader::new()
            .load_from_string(&toml_str, ConfigFormat::Toml)
            .unwrap();
        assert_eq!(parsed, config);
    }
}
