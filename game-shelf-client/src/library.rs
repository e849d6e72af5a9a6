//! Composition root: the catalog, the job board and the backend in one place.
//!
//! Front ends hold a single [`Library`] and drive everything through it. All
//! fetch-boundary errors are logged here and handed back to the caller; none
//! are retried.

use futures::future::join_all;

use game_shelf_core::{
    CatalogState, CoreError, FilterState, JobKind, JobPhase, JobStatus, LoadOutcome,
    MetadataSource, StatusTransition, TaskBoard,
};

use crate::backend::Backend;
use crate::error::ClientError;
use crate::types::{AddOutcome, PlayerRange, SearchResult, ServerStats};

/// What one polling tick did.
#[derive(Debug, Default)]
pub struct PollReport {
    /// Jobs that stopped this tick, with their reported success.
    pub finished: Vec<(JobKind, bool)>,
    pub still_running: Vec<JobKind>,
    /// Status fetches that failed this tick. Those jobs stay running.
    pub failures: Vec<(JobKind, String)>,
    /// Whether the catalog was reloaded because a job succeeded.
    pub refreshed: bool,
    pub refresh_error: Option<String>,
}

impl PollReport {
    pub fn any_succeeded(&self) -> bool {
        self.finished.iter().any(|(_, success)| *success)
    }
}

pub struct Library<B> {
    backend: B,
    catalog: CatalogState,
    tasks: TaskBoard,
}

impl<B: Backend> Library<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            catalog: CatalogState::new(),
            tasks: TaskBoard::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn tasks(&self) -> &TaskBoard {
        &self.tasks
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.catalog.set_filters(filters);
    }

    pub fn update_filters(&mut self, f: impl FnOnce(&mut FilterState)) {
        self.catalog.update_filters(f);
    }

    // ── Catalog loading ─────────────────────────────────────────────────

    /// Fetch the whole library and replace the catalog.
    pub async fn load(&mut self) -> Result<LoadOutcome, ClientError> {
        self.load_with(None).await
    }

    /// Reload after a backend mutation. Same as [`Library::load`].
    pub async fn refresh(&mut self) -> Result<LoadOutcome, ClientError> {
        self.load_with(None).await
    }

    /// Load with server-side player-count bounds.
    pub async fn load_filtered(&mut self, range: &PlayerRange) -> Result<LoadOutcome, ClientError> {
        self.load_with(Some(range)).await
    }

    async fn load_with(&mut self, range: Option<&PlayerRange>) -> Result<LoadOutcome, ClientError> {
        let ticket = self.catalog.begin_load();
        let result = self.backend.fetch_games(range).await;
        let outcome = self.catalog.finish_load(ticket, result);
        match &outcome {
            Ok(LoadOutcome::Applied { count }) => log::debug!("Loaded {} games", count),
            Ok(LoadOutcome::Empty) => log::debug!("Library is empty"),
            Ok(LoadOutcome::Stale) => log::debug!("Dropped stale catalog response"),
            Err(e) => log::warn!("Failed to load games: {}", e),
        }
        outcome
    }

    pub async fn server_stats(&self) -> Result<ServerStats, ClientError> {
        self.backend.fetch_stats().await
    }

    // ── Jobs ────────────────────────────────────────────────────────────

    /// Ask the backend to start `kind`. `force` only applies to the source A
    /// sync (re-sync games that already have metadata).
    ///
    /// For the scrape this is phase one; the slot then waits for
    /// [`Library::continue_scrape`]. A rejected request leaves the slot idle.
    pub async fn start_job(&mut self, kind: JobKind, force: bool) -> Result<Option<String>, ClientError> {
        self.tasks.ensure_idle(kind)?;
        let result = match kind {
            JobKind::Scrape => self.backend.open_browser().await,
            JobKind::SyncSourceA => self.backend.start_sync(force).await,
            JobKind::SyncSourceB => self.backend.start_sync_source_b().await,
        };
        let message = result.inspect_err(|e| log::warn!("Could not start {}: {}", kind, e))?;
        self.tasks.mark_started(kind)?;
        log::debug!("{} started", kind);
        Ok(message)
    }

    /// Scrape phase one.
    pub async fn open_browser(&mut self) -> Result<Option<String>, ClientError> {
        self.start_job(JobKind::Scrape, false).await
    }

    /// Scrape phase two, after the user logged in. A rejected request keeps
    /// the scrape waiting so the user can try again.
    pub async fn continue_scrape(&mut self) -> Result<Option<String>, ClientError> {
        if self.tasks.phase(JobKind::Scrape) != JobPhase::AwaitingContinue {
            return Err(CoreError::NotAwaitingContinue(JobKind::Scrape).into());
        }
        let message = self
            .backend
            .start_parsing()
            .await
            .inspect_err(|e| log::warn!("Could not continue scrape: {}", e))?;
        self.tasks.mark_continued()?;
        Ok(message)
    }

    /// Give up on a scrape waiting for the user. The backend is not told.
    pub fn cancel_scrape(&mut self) -> Result<(), ClientError> {
        Ok(self.tasks.cancel_awaiting()?)
    }

    /// Fetch status for every running job concurrently and apply it.
    ///
    /// A failed fetch is logged and reported but never stops the others. If
    /// any job finished successfully the catalog is reloaded once.
    pub async fn poll_once(&mut self) -> PollReport {
        let kinds = self.tasks.active_kinds();
        let backend = &self.backend;
        let results = join_all(
            kinds
                .iter()
                .map(|&kind| async move { (kind, backend.job_status(kind).await) }),
        )
        .await;

        let mut report = PollReport::default();
        for (kind, result) in results {
            match result {
                Ok(status) => match self.tasks.apply_status(kind, status) {
                    StatusTransition::StillRunning => report.still_running.push(kind),
                    StatusTransition::Finished { success } => report.finished.push((kind, success)),
                    StatusTransition::Ignored => {}
                },
                Err(e) => {
                    log::warn!("Failed to fetch {} status: {}", kind, e);
                    report.failures.push((kind, e.to_string()));
                }
            }
        }

        if report.any_succeeded() {
            match self.refresh().await {
                Ok(_) => report.refreshed = true,
                Err(e) => report.refresh_error = Some(e.to_string()),
            }
        }
        report
    }

    /// One-off status read that does not touch the job board.
    pub async fn job_status(&self, kind: JobKind) -> Result<JobStatus, ClientError> {
        self.backend.job_status(kind).await
    }

    /// Hide the panel for `kind`. A running job keeps being polled.
    pub fn dismiss(&mut self, kind: JobKind) {
        self.tasks.dismiss(kind);
    }

    pub async fn clear_logs(&mut self, kind: JobKind) -> Result<Option<String>, ClientError> {
        let message = self.backend.clear_logs(kind).await?;
        self.tasks.clear_logs(kind);
        Ok(message)
    }

    // ── Search / add / single sync ──────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        self.backend
            .search(query)
            .await
            .inspect_err(|e| log::warn!("Search failed: {}", e))
    }

    /// Add a game by its source A id. The catalog is reloaded when a game
    /// was actually added.
    pub async fn add_manual(&mut self, source_id: i64, name: &str) -> Result<AddOutcome, ClientError> {
        let outcome = self
            .backend
            .add_manual(source_id, name)
            .await
            .inspect_err(|e| log::warn!("Could not add {}: {}", name, e))?;
        if matches!(outcome, AddOutcome::Added { .. }) {
            self.refresh_after_mutation().await;
        }
        Ok(outcome)
    }

    /// Sync one game against one source, then reload.
    pub async fn sync_single(
        &mut self,
        id: i64,
        source: MetadataSource,
    ) -> Result<Option<String>, ClientError> {
        let message = self
            .backend
            .sync_single(id, source)
            .await
            .inspect_err(|e| log::warn!("Could not sync game {} with {}: {}", id, source, e))?;
        self.refresh_after_mutation().await;
        Ok(message)
    }

    /// The mutation already succeeded, so a failed reload only leaves the
    /// catalog stale.
    async fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.refresh().await {
            log::warn!("Library reload failed: {}", e);
        }
    }
}
