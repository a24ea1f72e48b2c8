//! Cursor pagination over the artwork store.
//!
//! A single logical reader walks the store newest-first by repeatedly
//! passing the returned cursor forward. Concurrent sessions are
//! independent; no global snapshot is guaranteed, so records inserted
//! ahead of a walk in progress may or may not appear. That forward-only
//! behavior is the documented read policy, not a defect.

mod cursor;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::InvalidInputError;
use crate::record::ArtworkRecord;
use crate::traits::ArtworkStore;

pub use cursor::Cursor;

/// One page of a descending walk over the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// The records in this page, in `(sort_key desc, id asc)` order.
    pub items: Vec<ArtworkRecord>,

    /// Cursor for the next page, or `None` at the end of the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<Cursor>,
}

/// Fetch one page of records from the store.
///
/// Reads `page_size + 1` records so the extra one proves whether more
/// data exists; `next_cursor` is emitted only in that case, encoding the
/// `(sort_key, id)` of the last returned record. The engine performs no
/// retry and caches nothing: a failed call surfaces the store error and
/// the same cursor can simply be re-issued.
///
/// # Errors
///
/// Returns [`InvalidInputError::PageSize`] for a zero page size, or
/// whatever the store's scan surfaces.
pub async fn fetch_page<S>(
    store: &S,
    cursor: Option<&Cursor>,
    page_size: usize,
) -> Result<Page>
where
    S: ArtworkStore + ?Sized,
{
    if page_size == 0 {
        return Err(InvalidInputError::PageSize.into());
    }

    let mut items = store.scan_descending(cursor, page_size + 1).await?;

    let next_cursor = if items.len() > page_size {
        items.truncate(page_size);
        items
            .last()
            .map(|record| Cursor::new(record.sort_key(), record.id.clone()))
    } else {
        None
    };

    Ok(Page { items, next_cursor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StoreError};
    use crate::types::{ArtworkId, Medium};
    use async_trait::async_trait;

    /// In-memory store holding pre-sorted records.
    struct MemoryStore {
        records: Vec<ArtworkRecord>,
        unavailable: bool,
    }

    impl MemoryStore {
        fn new(mut records: Vec<ArtworkRecord>) -> Self {
            records.sort_by(|a, b| {
                b.sort_key()
                    .cmp(&a.sort_key())
                    .then_with(|| a.id.cmp(&b.id))
            });
            Self {
                records,
                unavailable: false,
            }
        }
    }

    #[async_trait]
    impl ArtworkStore for MemoryStore {
        async fn scan_descending(
            &self,
            start_after: Option<&Cursor>,
            limit: usize,
        ) -> Result<Vec<ArtworkRecord>> {
            if self.unavailable {
                return Err(StoreError::Unavailable {
                    message: "simulated outage".to_string(),
                }
                .into());
            }

            let after = |record: &&ArtworkRecord| match start_after {
                Some(cursor) => cursor.precedes(record.sort_key(), &record.id),
                None => true,
            };

            Ok(self
                .records
                .iter()
                .filter(after)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn record(id: &str, medium: Medium, year: u16, month: u8, day: u8) -> ArtworkRecord {
        let mut r = ArtworkRecord::new(ArtworkId::new(id).unwrap(), medium);
        r.year = Some(year);
        r.month = Some(month);
        r.day = Some(day);
        r
    }

    /// Five records with sort keys 50/40/30/20/10 via day-of-month.
    fn five_record_store() -> MemoryStore {
        MemoryStore::new(vec![
            record("a", Medium::Drawing, 0, 0, 10),
            record("b", Medium::Audio, 0, 0, 20),
            record("c", Medium::Writing, 0, 0, 30),
            record("d", Medium::Sculpture, 0, 0, 40),
            record("e", Medium::Drawing, 0, 0, 50),
        ])
    }

    fn ids(page: &Page) -> Vec<&str> {
        page.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn walks_five_records_in_three_pages() {
        let store = five_record_store();

        let page1 = fetch_page(&store, None, 2).await.unwrap();
        assert_eq!(ids(&page1), ["e", "d"]);
        let cursor1 = page1.next_cursor.expect("more pages exist");
        assert_eq!(cursor1.sort_key(), 40);
        assert_eq!(cursor1.id().as_str(), "d");

        let page2 = fetch_page(&store, Some(&cursor1), 2).await.unwrap();
        assert_eq!(ids(&page2), ["c", "b"]);
        let cursor2 = page2.next_cursor.expect("one record remains");

        let page3 = fetch_page(&store, Some(&cursor2), 2).await.unwrap();
        assert_eq!(ids(&page3), ["a"]);
        assert!(page3.next_cursor.is_none());
    }

    #[tokio::test]
    async fn full_final_page_ends_the_walk() {
        let store = five_record_store();

        let page1 = fetch_page(&store, None, 5).await.unwrap();
        assert_eq!(page1.items.len(), 5);
        assert!(
            page1.next_cursor.is_none(),
            "a full page with nothing beyond it must not emit a cursor",
        );
    }

    #[tokio::test]
    async fn concatenated_pages_cover_the_snapshot_exactly_once() {
        let records: Vec<ArtworkRecord> = (0..23)
            .map(|i| {
                record(
                    &format!("art-{i:02}"),
                    Medium::ALL[i % Medium::ALL.len()],
                    2000 + (i % 7) as u16,
                    1 + (i % 12) as u8,
                    1 + (i % 28) as u8,
                )
            })
            .collect();
        let store = MemoryStore::new(records);

        let mut seen = Vec::new();
        let mut cursor: Option<Cursor> = None;
        loop {
            let page = fetch_page(&store, cursor.as_ref(), 4).await.unwrap();
            assert!(page.items.len() <= 4);
            seen.extend(page.items);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(seen.len(), 23);

        // Descending (sort_key, id asc) total order, no duplicates.
        for pair in seen.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            assert!(
                prev.sort_key() > next.sort_key()
                    || (prev.sort_key() == next.sort_key() && prev.id < next.id),
            );
        }
    }

    #[tokio::test]
    async fn duplicate_sort_keys_split_across_pages_without_loss() {
        // Four records share one sort key; page size 3 forces the tie
        // group to straddle a page boundary.
        let store = MemoryStore::new(vec![
            record("w", Medium::Drawing, 2024, 6, 1),
            record("x", Medium::Drawing, 2024, 6, 1),
            record("y", Medium::Drawing, 2024, 6, 1),
            record("z", Medium::Drawing, 2024, 6, 1),
            record("older", Medium::Drawing, 2023, 1, 1),
        ]);

        let page1 = fetch_page(&store, None, 3).await.unwrap();
        assert_eq!(ids(&page1), ["w", "x", "y"]);

        let page2 = fetch_page(&store, page1.next_cursor.as_ref(), 3)
            .await
            .unwrap();
        assert_eq!(ids(&page2), ["z", "older"]);
        assert!(page2.next_cursor.is_none());
    }

    #[tokio::test]
    async fn resume_with_same_cursor_is_idempotent() {
        let store = five_record_store();

        let first = fetch_page(&store, None, 2).await.unwrap();
        let cursor = first.next_cursor.unwrap();

        let once = fetch_page(&store, Some(&cursor), 2).await.unwrap();
        let twice = fetch_page(&store, Some(&cursor), 2).await.unwrap();
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(once.next_cursor, twice.next_cursor);
    }

    #[tokio::test]
    async fn zero_page_size_is_rejected() {
        let store = five_record_store();
        let err = fetch_page(&store, None, 0).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::PageSize)
        ));
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_retryable() {
        let mut store = five_record_store();
        store.unavailable = true;

        let err = fetch_page(&store, None, 2).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn empty_store_yields_empty_terminal_page() {
        let store = MemoryStore::new(Vec::new());
        let page = fetch_page(&store, None, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn page_serializes_cursor_as_token() {
        let page = Page {
            items: Vec::new(),
            next_cursor: Some(Cursor::new(40, ArtworkId::new("d").unwrap())),
        };
        let json = serde_json::to_value(&page).unwrap();
        let token = json["next_cursor"].as_str().unwrap();
        assert_eq!(Cursor::decode(token).unwrap().sort_key(), 40);
    }
}
