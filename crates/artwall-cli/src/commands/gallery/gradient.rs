//! Gradient derivation command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use artwall_core::{GradientEngine, Medium, Palette};

use crate::output;

#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Artwork id
    pub id: String,

    /// Medium of the work
    #[arg(long, default_value = "drawing")]
    pub medium: String,

    /// Theme name
    #[arg(long, default_value = "atelier")]
    pub theme: String,

    /// Palette configuration file (JSON); built-in palette when omitted
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Print the solid fallback color instead of the gradient
    #[arg(long)]
    pub fallback: bool,
}

pub fn run(args: GradientArgs) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => {
            let content = fs::read_to_string(path).context("Failed to read palette file")?;
            serde_json::from_str(&content).context("Failed to parse palette file")?
        }
        None => Palette::default(),
    };

    let engine = GradientEngine::new(palette);
    let medium = Medium::parse_lossy(&args.medium);

    if args.fallback {
        output::field("background", &engine.solid_fallback(medium).to_string());
    } else {
        let spec = engine.derive(&args.id, medium, &args.theme);
        output::field("background", &spec.to_css());
    }

    Ok(())
}
