//! List records command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use artwall_core::{ArtworkRecord, Cursor, GradientEngine, fetch_page, group_by_year};

use crate::output;
use crate::store;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of records to return
    #[arg(long, default_value_t = 100)]
    pub limit: usize,

    /// Pagination cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Insert year separators between groups of records
    #[arg(long)]
    pub by_year: bool,

    /// Annotate each record with its derived card gradient
    #[arg(long)]
    pub gradients: bool,

    /// Theme used for gradient derivation
    #[arg(long, default_value = "atelier")]
    pub theme: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, root: Option<PathBuf>) -> Result<()> {
    let store = store::open_store(root.as_deref())?;

    let cursor = args
        .cursor
        .as_deref()
        .map(Cursor::decode)
        .transpose()
        .context("Invalid cursor; restart from the first page")?;

    let page = fetch_page(&store, cursor.as_ref(), args.limit)
        .await
        .context("Failed to fetch page")?;

    if page.items.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    let engine = args.gradients.then(GradientEngine::default);

    if args.by_year {
        for group in group_by_year(page.items) {
            match group.year {
                Some(year) => output::heading(&format!("-- {year} --")),
                None => output::heading("-- undated --"),
            }
            for record in &group.items {
                print_record(record, engine.as_ref(), &args)?;
            }
        }
    } else {
        for record in &page.items {
            print_record(record, engine.as_ref(), &args)?;
        }
    }

    if let Some(cursor) = &page.next_cursor {
        eprintln!();
        eprintln!("{}: {}", "Next cursor".dimmed(), cursor.encode());
    }

    Ok(())
}

fn print_record(
    record: &ArtworkRecord,
    engine: Option<&GradientEngine>,
    args: &ListArgs,
) -> Result<()> {
    let mut value = serde_json::to_value(record)?;

    if let (Some(engine), Some(object)) = (engine, value.as_object_mut()) {
        let css = engine
            .derive(record.id.as_str(), record.medium, &args.theme)
            .to_css();
        object.insert("gradient".to_string(), serde_json::Value::String(css));
    }

    if args.pretty {
        output::json_pretty(&value)?;
    } else {
        output::json(&value)?;
    }

    Ok(())
}
