//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Scaffolding helper for code-transformation rules")]
pub struct Cli {
    /// Settings file (defaults to ./rgen.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of settings
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the placeholders derived from a recipe
    Variables {
        /// Recipe file (TOML)
        #[arg(short, long, value_name = "FILE")]
        recipe: PathBuf,
        /// Print a JSON object instead of `TOKEN = value` blocks
        #[arg(long)]
        json: bool,
    },
    /// Fill one template with the placeholders derived from a recipe
    Render {
        #[arg(short, long, value_name = "FILE")]
        recipe: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Register the recipe's rule in a set file, once
    Register {
        #[arg(short, long, value_name = "FILE")]
        recipe: PathBuf,
        /// Overrides `registration.set_file`
        #[arg(long, value_name = "FILE")]
        set_file: Option<PathBuf>,
        /// Overrides `registration.fqn_pattern`
        #[arg(long, value_name = "PATTERN")]
        fqn_pattern: Option<String>,
    },
}
