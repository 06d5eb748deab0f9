//! Application configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags. Every key is optional:
//!
//! ```toml
//! logo_path = "assets/images/logo.png"
//!
//! [window]
//! width = 480.0
//! height = 800.0
//!
//! [log]
//! level = "debug"
//! directory = "logs"
//! stdout = true
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when the configuration file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logo_path: PathBuf,
    pub window: WindowConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from("assets/images/logo.png"),
            window: WindowConfig::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive applied after startup, e.g. `"debug"`.
    pub level: Option<String>,
    /// Folder for `<app name>.log`. File logging is off when unset.
    pub directory: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            directory: None,
            stdout: true,
        }
    }
}

impl AppConfig {
    /// Loads the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        logo_path: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(logo_path) = logo_path {
            self.logo_path = logo_path;
        }
        if log_level.is_some() {
            self.log.level = log_level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let config = AppConfig::load(None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.width, 480.0);
        assert!(config.log.stdout);
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            height = 640.0

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 480.0);
        assert_eq!(config.window.height, 640.0);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert_eq!(config.log.directory, None);
        assert_eq!(config.logo_path, PathBuf::from("assets/images/logo.png"));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(AppConfig::from_toml_str("[window]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-config.toml");

        let error = AppConfig::load(Some(path.as_path())).unwrap_err();

        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn overrides_replace_only_what_is_given() {
        let config = AppConfig::default().with_overrides(Some(PathBuf::from("logo.png")), None);

        assert_eq!(config.logo_path, PathBuf::from("logo.png"));
        assert_eq!(config.log.level, None);

        let config = config.with_overrides(None, Some("trace".to_string()));

        assert_eq!(config.logo_path, PathBuf::from("logo.png"));
        assert_eq!(config.log.level.as_deref(), Some("trace"));
    }
}
