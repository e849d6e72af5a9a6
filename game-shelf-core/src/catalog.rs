//! In-memory catalog and its derived views.
//!
//! [`CatalogState`] is the single owner of the loaded records. Stats, genre
//! vocabulary and the filtered view are recomputed from `all` whenever the
//! records or filters change; nothing derived is patched incrementally.
//!
//! Loads are sequenced with [`LoadTicket`]s: every fetch takes a ticket before
//! it starts and hands it back with the result. Only the most recently issued
//! ticket may touch state, so a slow response can never overwrite a newer one.

use crate::filter::{FilterState, apply_filters};
use crate::record::GameRecord;
use crate::stats::{CatalogStats, derive_stats, extract_genres};

/// Sequence number of one catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What [`CatalogState::finish_load`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records replaced the catalog.
    Applied { count: usize },
    /// The backend returned no records; the catalog is now empty.
    Empty,
    /// A newer load was issued after this one; the response was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct CatalogState {
    all: Vec<GameRecord>,
    filtered: Vec<usize>,
    genres: Vec<String>,
    stats: CatalogStats,
    filters: FilterState,
    loading: bool,
    last_issued: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ─────────────────────────────────────────────────────────

    /// Mark a fetch in flight and return its ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_issued += 1;
        self.loading = true;
        LoadTicket(self.last_issued)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.last_issued
    }

    /// Settle the fetch identified by `ticket`.
    ///
    /// Outdated tickets leave everything untouched and report
    /// [`LoadOutcome::Stale`]. For the latest ticket `loading` is cleared no
    /// matter the result; on error the previous records stay in place and the
    /// error is handed back to the caller.
    pub fn finish_load<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<GameRecord>, E>,
    ) -> Result<LoadOutcome, E> {
        if !self.is_latest(ticket) {
            log::debug!(
                "Discarding catalog response #{} (latest is #{})",
                ticket.0,
                self.last_issued
            );
            return Ok(LoadOutcome::Stale);
        }
        self.loading = false;
        let records = result?;
        let count = records.len();
        self.ingest(records);
        Ok(if count == 0 {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Applied { count }
        })
    }

    /// Replace every record, then recompute stats, genres and the filtered
    /// view in that order.
    pub fn ingest(&mut self, records: Vec<GameRecord>) {
        self.all = records;
        self.stats = derive_stats(&self.all);
        self.genres = extract_genres(&self.all);
        self.refilter();
        log::debug!(
            "Ingested {} records ({} visible, {} genres)",
            self.all.len(),
            self.filtered.len(),
            self.genres.len()
        );
    }

    // ── Filtering ───────────────────────────────────────────────────────

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refilter();
    }

    /// Mutate the filters in place and re-filter once.
    pub fn update_filters(&mut self, f: impl FnOnce(&mut FilterState)) {
        f(&mut self.filters);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.update_filters(FilterState::clear);
    }

    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.all, &self.filters);
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn all(&self) -> &[GameRecord] {
        &self.all
    }

    /// Records passing the current filters, in sort order.
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &GameRecord> + '_ {
        self.filtered.iter().map(|&i| &self.all[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&GameRecord> {
        self.all.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
