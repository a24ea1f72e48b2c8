//! Get record command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use artwall_core::ArtworkId;

use crate::output;
use crate::store;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs, root: Option<PathBuf>) -> Result<()> {
    let store = store::open_store(root.as_deref())?;

    let id = ArtworkId::new(&args.id).context("Invalid artwork id")?;

    let record = store
        .get_record(&id)
        .await
        .context("Failed to fetch record")?;

    if args.pretty {
        output::json_pretty(&record)?;
    } else {
        output::json(&record)?;
    }

    Ok(())
}
