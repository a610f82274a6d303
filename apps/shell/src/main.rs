mod catalog;
mod cli;
mod commands;
mod config;

use crate::cli::{Cli, Commands};
use crate::config::ShellConfig;
use anyhow::Result;
use clap::Parser;
use enumkit::kernel::config::load_config;
use enumkit_logger::Logger;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ShellConfig = load_config(cli.config.as_deref())?;
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&config.log)?.init()?;

    catalog::register(&config.registry)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Domains {} => commands::domains(&mut out)?,
        Commands::Inspect { file } => commands::inspect(&file, &mut out)?,
        Commands::Check { file } => commands::check(&file, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
