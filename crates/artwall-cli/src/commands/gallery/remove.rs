//! Remove record command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use artwall_core::ArtworkId;

use crate::output;
use crate::store;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Record id
    pub id: String,
}

pub async fn run(args: RemoveArgs, root: Option<PathBuf>) -> Result<()> {
    let store = store::open_store(root.as_deref())?;

    let id = ArtworkId::new(&args.id).context("Invalid artwork id")?;

    store
        .delete_record(&id)
        .await
        .context("Failed to delete record")?;

    output::success(&format!("Removed record {}", id));

    Ok(())
}
