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


use crate::error::{ConfigError, ConfigResult};
use crate::schema::*;

/// Log levels accepted by `observability.log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Log formats accepted by `observability.log_format`
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Validator for configuration settings
pub trait Validator {
    /// Check the settings, returning the first problem found
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for Config {
    fn validate(&self) -> ConfigResult<()> {
        self.tools.validate()?;
        self.catalog.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

impl Validator for ToolsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.ffprobe.trim().is_empty() {
            return Err(ConfigError::MissingRequired("tools.ffprobe".to_string()));
        }

        if self.ffmpeg.trim().is_empty() {
            return Err(ConfigError::MissingRequired("tools.ffmpeg".to_string()));
        }

        Ok(())
    }
}

impl Validator for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.thumbnail_dir.trim().is_empty() {
            return Err(ConfigError::MissingRequired(
                "catalog.thumbnail_dir".to_string(),
            ));
        }

        if !self.thumbnail_offset_seconds.is_finite() || self.thumbnail_offset_seconds <= 0.0 {
            return Err(ConfigError::invalid_value(
                "catalog.thumbnail_offset_seconds",
                format!(
                    "must be a positive number of seconds, got {}",
                    self.thumbnail_offset_seconds
                ),
            ));
        }

        if !(1..=31).contains(&self.thumbnail_quality) {
            return Err(ConfigError::invalid_value(
                "catalog.thumbnail_quality",
                format!("must be between 1 and 31, got {}", self.thumbnail_quality),
            ));
        }

        Ok(())
    }
}

impl Validator for ObservabilityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_level",
                format!("must be one of: {}", LOG_LEVELS.join(", ")),
            ));
        }

        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_format",
                format!("must be one of: {}", LOG_FORMATS.join(", ")),
            ));
        }

        Ok(())
    }
}
