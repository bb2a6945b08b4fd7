// Configuration file handling
//
// The rc file lives at ~/.featmatrix/rc and holds `key=value` lines:
//
//   data.location=features.json
//   ides.order=VSCode,Visual Studio,JetBrains
//   color=auto
//
// Lines starting with '#' are comments. Unknown keys are logged and skipped.

use clap::ValueEnum;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::matrix::IdeOrder;

/// Dataset location when neither the rc file nor the command line names one
pub const DEFAULT_DATA_FILE: &str = "features.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid value '{value}' for {key} (line {line})")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },
    #[error("ides.order cannot be empty (line {line})")]
    EmptyIdeOrder { line: usize },
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse_name(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Effective settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub data_location: Option<PathBuf>,
    pub ide_order: IdeOrder,
    pub color: ColorMode,
}

impl Config {
    /// Path of the rc file, if a home directory can be found
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".featmatrix").join("rc"))
    }

    /// Load the rc file; a missing file yields the defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base_dir)
    }

    /// Parse rc content. Relative `data.location` paths resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::warn!("ignoring malformed config line {}: {}", line_no, line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "data.location" => {
                    let path = PathBuf::from(value);
                    config.data_location = Some(if path.is_relative() {
                        base_dir.join(path)
                    } else {
                        path
                    });
                }
                "ides.order" => {
                    config.ide_order = IdeOrder::parse(value)
                        .ok_or(ConfigError::EmptyIdeOrder { line: line_no })?;
                }
                "color" => {
                    config.color = ColorMode::parse_name(value).ok_or_else(|| {
                        ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                            line: line_no,
                        }
                    })?;
                }
                _ => log::warn!("ignoring unknown config key '{}' (line {})", key, line_no),
            }
        }

        Ok(config)
    }

    /// Dataset location to use when the command line gives none
    pub fn data_location_or_default(&self) -> PathBuf {
        self.data_location
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
