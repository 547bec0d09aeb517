//! Configuration file support
//!
//! Loads default settings from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{Settings, DEFAULT_LOG_LEVEL};
use crate::error::{Result, ShiftError};
use crate::offset::Offset;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "srt-offset.toml";

/// Configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default offset, in duration syntax (`1.5s`, `-200ms`)
    pub offset: Option<String>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShiftError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| ShiftError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ShiftError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration
    pub fn default_config() -> Self {
        Self {
            offset: Some(Offset::ZERO.to_string()),
            logging: Some(LoggingSettings {
                level: DEFAULT_LOG_LEVEL.to_string(),
            }),
        }
    }

    /// Convert to Settings, validating the offset
    pub fn into_settings(self) -> Result<Settings> {
        let offset = match self.offset {
            Some(ref offset) => offset.parse()?,
            None => Offset::ZERO,
        };
        Ok(Settings {
            offset,
            log_level: self
                .logging
                .map(|l| l.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}
