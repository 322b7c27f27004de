mod args;
mod commands;

use crate::args::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use rgen_generator::{Settings, load_settings};
use rgen_logger::{LevelFilter, Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?;
    let _logger = init_logger(&settings, cli.verbose)?;

    match cli.command {
        Commands::Variables { recipe, json } => commands::variables(&recipe, json, &settings)?,
        Commands::Render { recipe, template, output } => {
            commands::render(&recipe, &template, output.as_deref(), &settings)?;
        },
        Commands::Register { recipe, set_file, fqn_pattern } => {
            commands::register(&recipe, set_file.as_deref(), fqn_pattern.as_deref(), &settings)?;
        },
    }

    Ok(())
}

fn init_logger(settings: &Settings, verbose: bool) -> Result<Logger> {
    let level = if verbose { LevelFilter::DEBUG } else { parse_level(&settings.logging.level)? };
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);

    let logger = match &settings.logging.directory {
        Some(directory) => builder.path(directory).json(settings.logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
