use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::GameRecord;

/// Aggregate counts over the whole catalog (never the filtered view).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub synced_source_a: usize,
    pub synced_source_b: usize,
    pub local_coop: usize,
    pub online_coop: usize,
    /// Records synced with neither source.
    pub unsynced: usize,
}

pub fn derive_stats(records: &[GameRecord]) -> CatalogStats {
    records.iter().fold(
        CatalogStats {
            total: records.len(),
            ..CatalogStats::default()
        },
        |mut stats, r| {
            stats.synced_source_a += usize::from(r.source_a.synced);
            stats.synced_source_b += usize::from(r.source_b.synced);
            stats.local_coop += usize::from(r.is_local_coop());
            stats.online_coop += usize::from(r.is_online_coop());
            stats.unsynced += usize::from(r.has_no_metadata());
            stats
        },
    )
}

/// Sorted, deduplicated genre names across every record.
pub fn extract_genres(records: &[GameRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.genres().iter())
        .filter(|g| !g.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
