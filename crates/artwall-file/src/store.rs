//! Filesystem storage for the gallery.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use artwall_core::error::{Error, StoreError};
use artwall_core::{ArtworkId, ArtworkRecord, ArtworkStore, Cursor, Medium, Result};

fn map_io(err: std::io::Error) -> Error {
    Error::Store(StoreError::Unavailable {
        message: format!("IO error: {}", err),
    })
}

/// Filesystem-backed artwork store.
///
/// Records live at `<root>/artwall/<medium>/<id>.json`. The path is
/// authoritative for a record's id and medium; the file body carries
/// the display fields.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the gallery data directory.
    fn gallery_dir(&self) -> PathBuf {
        self.root.join("artwall")
    }

    /// Get the directory for a specific medium.
    fn medium_dir(&self, medium: Medium) -> PathBuf {
        self.gallery_dir().join(medium.as_str())
    }

    /// Get the path for a specific record.
    fn record_path(&self, medium: Medium, id: &ArtworkId) -> PathBuf {
        self.medium_dir(medium).join(format!("{}.json", id))
    }

    /// Generate a fresh record id.
    pub fn generate_id() -> Result<ArtworkId> {
        ArtworkId::new(Uuid::new_v4().simple().to_string())
    }

    /// Read and decode one record file, taking id and medium from the path.
    fn read_record(&self, path: &Path, medium: Medium, id: &ArtworkId) -> Result<ArtworkRecord> {
        let content = fs::read_to_string(path).map_err(map_io)?;

        let mut record: ArtworkRecord =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        record.id = id.clone();
        record.medium = medium;

        Ok(record)
    }

    /// Write a record to the store, replacing any existing version.
    #[instrument(skip(self, record), fields(id = %record.id, medium = %record.medium))]
    pub async fn put_record(&self, record: &ArtworkRecord) -> Result<()> {
        let path = self.record_path(record.medium, &record.id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let content = serde_json::to_string_pretty(record).map_err(|e| StoreError::Corrupt {
            id: record.id.to_string(),
            message: e.to_string(),
        })?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        // A medium change moves the record between directories; drop any
        // copy under another medium so one id maps to one file.
        for medium in Medium::ALL {
            if medium == record.medium {
                continue;
            }
            let stale = self.record_path(medium, &record.id);
            if stale.exists() {
                fs::remove_file(&stale).map_err(map_io)?;
                debug!(old_medium = %medium, "Removed stale record file");
            }
        }

        debug!("Stored record");

        Ok(())
    }

    /// Fetch a single record by id, searching every medium directory.
    #[instrument(skip(self))]
    pub async fn get_record(&self, id: &ArtworkId) -> Result<ArtworkRecord> {
        for medium in Medium::ALL {
            let path = self.record_path(medium, id);
            if path.exists() {
                return self.read_record(&path, medium, id);
            }
        }

        Err(StoreError::NotFound { id: id.to_string() }.into())
    }

    /// Delete a record by id. Deleting a missing record is not an error.
    #[instrument(skip(self))]
    pub async fn delete_record(&self, id: &ArtworkId) -> Result<()> {
        for medium in Medium::ALL {
            let path = self.record_path(medium, id);
            if path.exists() {
                fs::remove_file(&path).map_err(map_io)?;
                debug!(medium = %medium, "Deleted record");
                return Ok(());
            }
        }

        Ok(())
    }

    /// Load every record in the store, skipping entries that fail to decode.
    fn load_all(&self) -> Result<Vec<ArtworkRecord>> {
        let mut records = Vec::new();

        for medium in Medium::ALL {
            let dir = self.medium_dir(medium);
            if !dir.exists() {
                continue;
            }

            for entry in fs::read_dir(&dir).map_err(map_io)? {
                let entry = entry.map_err(map_io)?;
                let path = entry.path();

                if !path.extension().is_some_and(|ext| ext == "json") {
                    continue;
                }

                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let id = match ArtworkId::new(stem) {
                    Ok(id) => id,
                    Err(_) => {
                        warn!(file = %path.display(), "Skipping file with invalid record id");
                        continue;
                    }
                };

                match self.read_record(&path, medium, &id) {
                    Ok(record) => records.push(record),
                    Err(Error::Store(StoreError::Corrupt { message, .. })) => {
                        warn!(file = %path.display(), %message, "Skipping corrupt record");
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl ArtworkStore for FileStore {
    #[instrument(skip(self, start_after))]
    async fn scan_descending(
        &self,
        start_after: Option<&Cursor>,
        limit: usize,
    ) -> Result<Vec<ArtworkRecord>> {
        let mut records = self.load_all()?;

        records.sort_by(|a, b| {
            b.sort_key()
                .cmp(&a.sort_key())
                .then_with(|| a.id.cmp(&b.id))
        });

        let records: Vec<ArtworkRecord> = records
            .into_iter()
            .filter(|record| match start_after {
                Some(cursor) => cursor.precedes(record.sort_key(), &record.id),
                None => true,
            })
            .take(limit)
            .collect();

        debug!(count = records.len(), "Scanned records");

        Ok(records)
    }
}
