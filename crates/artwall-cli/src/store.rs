//! Store location resolution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use artwall_file::FileStore;

/// Resolve the store root and open the file store.
///
/// An explicit `--root` wins; otherwise the platform data directory is
/// used (created on first run).
pub fn open_store(root: Option<&Path>) -> Result<FileStore> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => default_root()?,
    };

    fs::create_dir_all(&root).context("Failed to create store directory")?;

    debug!(root = %root.display(), "Opened gallery store");

    Ok(FileStore::new(root))
}

fn default_root() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "artwall").context("Could not determine data directory")?;

    Ok(dirs.data_dir().to_path_buf())
}
