//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Pick a filter directive from an explicit level or the `-v` count.
    #[must_use]
    pub fn from_verbosity(level: Option<&str>, verbose: u8, format: LogFormat) -> Self {
        let default = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level: level.unwrap_or(default).to_string(),
            format,
        }
    }

    /// Check that the filter directive parses.
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "log_level",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so stdout carries only the session transcript.
    pub fn init(&self) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
                field: "log_level",
                reason: e.to_string(),
            })?,
        };

        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Pretty => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let level = |v| LoggingConfig::from_verbosity(None, v, LogFormat::Pretty).level;
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(9), "trace");
    }

    #[test]
    fn explicit_level_wins_over_verbosity() {
        let config = LoggingConfig::from_verbosity(Some("configurator=debug"), 0, LogFormat::Json);
        assert_eq!(config.level, "configurator=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn validate_accepts_directives() {
        assert!(LoggingConfig::default().validate().is_ok());
        let config = LoggingConfig::from_verbosity(Some("info,configurator=trace"), 0, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_garbage() {
        let config = LoggingConfig::from_verbosity(Some("configurator=loud"), 0, LogFormat::Pretty);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }
}
