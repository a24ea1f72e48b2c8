//! Artwork record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ArtworkId, Medium};

/// Sort key for pagination ordering: a composite `YYYYMMDD` value.
pub type SortKey = i64;

/// A record from the gallery store.
///
/// The core treats records as read-only input: `id`, `medium` and the
/// date fields drive gradient derivation and pagination ordering, while
/// every other display field rides along opaquely in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Unique identifier, stable for the lifetime of the record.
    pub id: ArtworkId,

    /// Creative-work category, used to pick the base color family.
    pub medium: Medium,

    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Link to the underlying work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Year the work was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// Month the work was created (1-12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,

    /// Day the work was created (1-31).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,

    /// When the record entered the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// All other display fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ArtworkRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: ArtworkId, medium: Medium) -> Self {
        Self {
            id,
            medium,
            title: None,
            tags: Vec::new(),
            url: None,
            year: None,
            month: None,
            day: None,
            created_at: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The composite ordering value used for descending pagination.
    ///
    /// Missing date parts default to year 0, month 1, day 1, matching the
    /// gallery's "undated works sort last" behavior. Not necessarily
    /// unique; pagination breaks ties by id ascending.
    pub fn sort_key(&self) -> SortKey {
        let year = i64::from(self.year.unwrap_or(0));
        let month = i64::from(self.month.unwrap_or(1));
        let day = i64::from(self.day.unwrap_or(1));
        year * 10_000 + month * 100 + day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ArtworkId {
        ArtworkId::new(s).unwrap()
    }

    #[test]
    fn sort_key_is_composite_date() {
        let mut record = ArtworkRecord::new(id("a"), Medium::Drawing);
        record.year = Some(2024);
        record.month = Some(7);
        record.day = Some(3);
        assert_eq!(record.sort_key(), 2024_07_03);
    }

    #[test]
    fn sort_key_defaults_for_missing_parts() {
        let mut record = ArtworkRecord::new(id("a"), Medium::Drawing);
        assert_eq!(record.sort_key(), 101);

        record.year = Some(2023);
        assert_eq!(record.sort_key(), 2023_01_01);
    }

    #[test]
    fn unknown_fields_pass_through() {
        let json = r#"{
            "id": "artwork-123",
            "medium": "audio",
            "title": "Untitled",
            "year": 2022,
            "waveformUrl": "https://example.com/w.png",
            "durationSeconds": 184
        }"#;

        let record: ArtworkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.medium, Medium::Audio);
        assert_eq!(record.extra["waveformUrl"], "https://example.com/w.png");
        assert_eq!(record.extra["durationSeconds"], 184);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["waveformUrl"], "https://example.com/w.png");
    }
}
