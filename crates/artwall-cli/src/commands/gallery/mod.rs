//! Gallery subcommand implementations.

mod add;
mod get;
mod gradient;
mod list;
mod remove;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct GalleryCommand {
    #[command(subcommand)]
    pub command: GallerySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GallerySubcommand {
    /// Add a record to the store
    Add(add::AddArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// List one page of records, newest first
    List(list::ListArgs),

    /// Delete a record
    Remove(remove::RemoveArgs),

    /// Derive the CSS gradient for an artwork card
    Gradient(gradient::GradientArgs),
}

pub async fn handle(cmd: GalleryCommand, root: Option<PathBuf>) -> Result<()> {
    match cmd.command {
        GallerySubcommand::Add(args) => add::run(args, root).await,
        GallerySubcommand::Get(args) => get::run(args, root).await,
        GallerySubcommand::List(args) => list::run(args, root).await,
        GallerySubcommand::Remove(args) => remove::run(args, root).await,
        GallerySubcommand::Gradient(args) => gradient::run(args),
    }
}
