//! Runtime configuration assembled from command-line flags.

pub mod logging;

use std::io::IsTerminal;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::output::OutputConfig;
use crate::error::Result;

pub use logging::{LogFormat, LoggingConfig};

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Build and validate the configuration from parsed flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let logging =
            LoggingConfig::from_verbosity(cli.log_level.as_deref(), cli.verbose, cli.log_format);
        logging.validate()?;

        let color = cli.color.enabled(std::io::stdout().is_terminal());
        let output = OutputConfig::new(cli.json, color && !cli.json);

        Ok(Self { logging, output })
    }
}
