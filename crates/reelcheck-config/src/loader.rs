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
use crate::schema::Config;
use crate::validation::Validator;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Overrides `tools.ffprobe`
pub const ENV_FFPROBE: &str = "REELCHECK_FFPROBE";
/// Overrides `tools.ffmpeg`
pub const ENV_FFMPEG: &str = "REELCHECK_FFMPEG";
/// Overrides `observability.log_level`
pub const ENV_LOG_LEVEL: &str = "REELCHECK_LOG_LEVEL";
/// Overrides `observability.log_format`
pub const ENV_LOG_FORMAT: &str = "REELCHECK_LOG_FORMAT";
/// Overrides `catalog.thumbnails`
pub const ENV_THUMBNAILS: &str = "REELCHECK_THUMBNAILS";

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::InvalidPath(path.to_path_buf())),
        }
    }

    /// Get format name as string
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }
}

/// Configuration loader
pub struct ConfigLoader {
    validate: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        ConfigLoader { validate: true }
    }

    /// Create a loader without validation
    pub fn without_validation() -> Self {
        ConfigLoader { validate: false }
    }

    /// Load configuration from a file
    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).await?;

        info!(
            "Loaded {} configuration file: {}",
            format.name(),
            path.display()
        );

        self.load_from_string(&content, format)
    }

    /// Load configuration from a string
    pub fn load_from_string(&self, content: &str, format: ConfigFormat) -> ConfigResult<Config> {
        let config: Config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };

        debug!("Configuration loaded from {}", format.name());

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Without a path, defaults are used. Overrides are validated again.
    pub async fn load_with_overrides(&self, path: Option<&Path>) -> ConfigResult<Config> {
        let mut config = match path {
            Some(path) => self.load_file(path).await?,
            None => Config::default(),
        };
        self.apply_env_overrides(&mut config)?;

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply `REELCHECK_*` environment variable overrides
    pub fn apply_env_overrides(&self, config: &mut Config) -> ConfigResult<()> {
        self.apply_overrides_from(config, |name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_overrides_from<F>(&self, config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Tools
        if let Some(value) = lookup(ENV_FFPROBE) {
            debug!("{} overrides tools.ffprobe", ENV_FFPROBE);
            config.tools.ffprobe = value;
        }
        if let Some(value) = lookup(ENV_FFMPEG) {
            debug!("{} overrides tools.ffmpeg", ENV_FFMPEG);
            config.tools.ffmpeg = value;
        }

        // Catalog settings
        if let Some(value) = lookup(ENV_THUMBNAILS) {
            config.catalog.thumbnails = parse_bool(ENV_THUMBNAILS, &value)?;
        }

        // Observability settings
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.observability.log_level = value;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.observability.log_format = value;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse boolean from string (accepts: true, false, yes, no, 1, 0, on, off)
fn parse_bool(variable_name: &str, value: &str) -> ConfigResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::env_var_parsing_error(
            variable_name,
            value,
            "expected 'true', 'false', 'yes', 'no', '1', '0', 'on', or 'off'",
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path("config.toml").unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("config.yaml").unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("config.yml").unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("config.json").unwrap(), ConfigFormat::Json);
    }

    #[test]
    fn test_format_detection_error() {
        assert!(matches!(
            ConfigFormat::from_path("config.xml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ConfigFormat::from_path("config"),
            Err(ConfigError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_parse_bool() {
        for value in ["true", "YES", "1", "on"] {
            assert!(parse_bool("X", value).unwrap());
        }
        for value in ["false", "no", "0", "Off"] {
            assert!(!parse_bool("X", value).unwrap());
        }
        let err = parse_bool("REELCHECK_THUMBNAILS", "maybe").unwrap_err();
        assert!(err.to_string().contains("REELCHECK_THUMBNAILS=maybe"));
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new();
        let toml = r#"
        [tools]
        ffprobe = "/opt/ffmpeg/bin/ffprobe"

        [catalog]
        thumbnail_quality = 5
        "#;
        let config = loader.load_from_string(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.tools.ffprobe, "/opt/ffmpeg/bin/ffprobe");
        assert_eq!(config.tools.ffmpeg, "ffmpeg");
        assert_eq!(config.catalog.thumbnail_quality, 5);
    }

    #[test]
    fn test_parse_yaml() {
        let loader = ConfigLoader::new();
        let yaml = "output:\n  pretty: false\nobservability:\n  log_level: debug\n";
        let config = loader.load_from_string(yaml, ConfigFormat::Yaml).unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new();
        let json = r#"{"catalog": {"thumbnails": false, "thumbnail_dir": "thumbs"}}"#;
        let config = loader.load_from_string(json, ConfigFormat::Json).unwrap();
        assert!(!config.catalog.thumbnails);
        assert_eq!(config.catalog.thumbnail_dir, "thumbs");
    }

    #[test]
    fn test_validation_can_be_skipped() {
        let json = r#"{"catalog": {"thumbnail_quality": 99}}"#;
        assert!(ConfigLoader::new()
            .load_from_string(json, ConfigFormat::Json)
            .is_err());
        let config = ConfigLoader::without_validation()
            .load_from_string(json, ConfigFormat::Json)
            .unwrap();
        assert_eq!(config.catalog.thumbnail_quality, 99);
    }

    #[test]
    fn test_env_overrides() {
        let loader = ConfigLoader::new();
        let mut config = Config::default();
        loader
            .apply_overrides_from(
                &mut config,
                env(&[
                    (ENV_FFPROBE, "/tmp/fake-ffprobe"),
                    (ENV_FFMPEG, "/tmp/fake-ffmpeg"),
                    (ENV_THUMBNAILS, "off"),
                    (ENV_LOG_LEVEL, "debug"),
                    (ENV_LOG_FORMAT, "json"),
                ]),
            )
            .unwrap();

        assert_eq!(config.tools.ffprobe, "/tmp/fake-ffprobe");
        assert_eq!(config.tools.ffmpeg, "/tmp/fake-ffmpeg");
        assert!(!config.catalog.thumbnails);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, "json");
    }

    #[test]
    fn test_env_overrides_absent_keep_values() {
        let loader = ConfigLoader::new();
        let mut config = Config::default();
        loader.apply_overrides_from(&mut config, env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_bool_override() {
        let loader = ConfigLoader::new();
        let mut config = Config::default();
        let err = loader
            .apply_overrides_from(&mut config, env(&[(ENV_THUMBNAILS, "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParsingError { .. }));
    }
}
