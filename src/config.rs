//! Runtime settings

use crate::offset::Offset;

/// Default log level when neither the command line nor a config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings resolved from the config file, before command line overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Offset applied when `--offset` is not given
    pub offset: Offset,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            offset: Offset::ZERO,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Default tracing filter directive for this crate.
    pub fn log_filter(&self) -> String {
        format!("srt_offset={}", self.log_level)
    }
}
