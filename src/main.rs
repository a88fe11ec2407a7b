use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use configurator::adapter::inbound::cli::command::Cli;
use configurator::adapter::inbound::cli::output::Output;
use configurator::adapter::inbound::cli::session::Session;
use configurator::infrastructure::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli).context("invalid configuration")?;
    config
        .logging
        .init()
        .context("failed to initialize logging")?;
    info!("configurator starting");

    let output = Output::new(io::stdout().lock(), config.output);
    let mut session = Session::new(io::stdin().lock(), output);
    session.run().context("session aborted")?;

    info!("configurator stopped");
    Ok(())
}
