//! Add record command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use artwall_core::{ArtworkId, ArtworkRecord, Medium};
use artwall_file::FileStore;

use crate::output;
use crate::store;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Medium of the work (audio, drawing, sculpture, writing, video)
    #[arg(long)]
    pub medium: String,

    /// Display title
    #[arg(long)]
    pub title: Option<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Link to the underlying work
    #[arg(long)]
    pub url: Option<String>,

    /// Year the work was created
    #[arg(long)]
    pub year: Option<u16>,

    /// Month the work was created (1-12)
    #[arg(long)]
    pub month: Option<u8>,

    /// Day the work was created (1-31)
    #[arg(long)]
    pub day: Option<u8>,

    /// Explicit record id (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(args: AddArgs, root: Option<PathBuf>) -> Result<()> {
    let store = store::open_store(root.as_deref())?;

    let id = match &args.id {
        Some(s) => ArtworkId::new(s).context("Invalid artwork id")?,
        None => FileStore::generate_id()?,
    };

    let mut record = ArtworkRecord::new(id.clone(), Medium::parse_lossy(&args.medium));
    record.title = args.title;
    record.tags = args.tags;
    record.url = args.url;
    record.year = args.year;
    record.month = args.month;
    record.day = args.day;
    record.created_at = Some(Utc::now());

    store
        .put_record(&record)
        .await
        .context("Failed to store record")?;

    output::success(&format!("Created record {}", id));
    output::field("Medium", record.medium.as_str());

    Ok(())
}
