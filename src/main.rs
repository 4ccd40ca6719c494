mod cli;
mod error;
mod ghrs;
mod render;
mod stats;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting ghrs-dashboard");
    cli.execute()?;

    Ok(())
}
