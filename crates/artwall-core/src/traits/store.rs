//! Artwork store trait.

use async_trait::async_trait;

use crate::Result;
use crate::pagination::Cursor;
use crate::record::ArtworkRecord;

/// The ordered-scan contract the pagination engine consumes.
///
/// Implementations are read-only from the engine's point of view and
/// agnostic to the backing store, provided the ordering contract holds:
/// records come back in descending sort key with ascending id as the
/// tie-break, a total order that guarantees no record is skipped or
/// duplicated across page boundaries.
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// Return up to `limit` records strictly after `start_after` in
    /// `(sort_key desc, id asc)` order, or from the top when
    /// `start_after` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Unavailable`] when the
    /// backing store cannot be reached; the same call can be re-issued
    /// once it recovers.
    async fn scan_descending(
        &self,
        start_after: Option<&Cursor>,
        limit: usize,
    ) -> Result<Vec<ArtworkRecord>>;
}
