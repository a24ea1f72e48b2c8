//! Year grouping for gallery pages.

use serde::{Deserialize, Serialize};

use crate::record::ArtworkRecord;

/// A run of consecutive records sharing a creation year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearGroup {
    /// The shared year, or `None` for undated works.
    pub year: Option<u16>,
    /// The records in this group, in their original order.
    pub items: Vec<ArtworkRecord>,
}

/// Group records by year for display with separators.
///
/// Input is expected in the gallery's newest-first order; grouping only
/// merges consecutive records with the same year, so an unsorted input
/// simply produces more groups rather than reordering anything.
pub fn group_by_year(records: Vec<ArtworkRecord>) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();

    for record in records {
        match groups.last_mut() {
            Some(group) if group.year == record.year => group.items.push(record),
            _ => groups.push(YearGroup {
                year: record.year,
                items: vec![record],
            }),
        }
    }

    groups
}
