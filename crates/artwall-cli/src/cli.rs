//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::gallery::GalleryCommand;

/// Artwall CLI for local gallery stores.
#[derive(Parser, Debug)]
#[command(name = "artwall")]
#[command(author, version = env!("ARTWALL_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Gallery store root (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Gallery store operations
    Gallery(GalleryCommand),
}
