//! The async seam between [`Library`](crate::Library) and the REST backend.

use game_shelf_core::{GameRecord, JobKind, JobStatus, MetadataSource};

use crate::client::BackendClient;
use crate::error::ClientError;
use crate::types::{AddOutcome, PlayerRange, SearchResult, ServerStats};

/// Operations the library needs from a backend. Acknowledging calls return
/// the backend's message text, if it sent one.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn fetch_games(&self, range: Option<&PlayerRange>) -> Result<Vec<GameRecord>, ClientError>;

    async fn fetch_stats(&self) -> Result<ServerStats, ClientError>;

    async fn start_sync(&self, force_resync: bool) -> Result<Option<String>, ClientError>;

    async fn start_sync_source_b(&self) -> Result<Option<String>, ClientError>;

    async fn open_browser(&self) -> Result<Option<String>, ClientError>;

    async fn start_parsing(&self) -> Result<Option<String>, ClientError>;

    async fn job_status(&self, kind: JobKind) -> Result<JobStatus, ClientError>;

    async fn clear_logs(&self, kind: JobKind) -> Result<Option<String>, ClientError>;

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError>;

    async fn add_manual(&self, source_id: i64, name: &str) -> Result<AddOutcome, ClientError>;

    async fn sync_single(
        &self,
        id: i64,
        source: MetadataSource,
    ) -> Result<Option<String>, ClientError>;
}

impl Backend for BackendClient {
    async fn fetch_games(&self, range: Option<&PlayerRange>) -> Result<Vec<GameRecord>, ClientError> {
        BackendClient::fetch_games(self, range).await
    }

    async fn fetch_stats(&self) -> Result<ServerStats, ClientError> {
        BackendClient::fetch_stats(self).await
    }

    async fn start_sync(&self, force_resync: bool) -> Result<Option<String>, ClientError> {
        BackendClient::start_sync(self, force_resync).await
    }

    async fn start_sync_source_b(&self) -> Result<Option<String>, ClientError> {
        BackendClient::start_sync_source_b(self).await
    }

    async fn open_browser(&self) -> Result<Option<String>, ClientError> {
        BackendClient::open_browser(self).await
    }

    async fn start_parsing(&self) -> Result<Option<String>, ClientError> {
        BackendClient::start_parsing(self).await
    }

    async fn job_status(&self, kind: JobKind) -> Result<JobStatus, ClientError> {
        BackendClient::job_status(self, kind).await
    }

    async fn clear_logs(&self, kind: JobKind) -> Result<Option<String>, ClientError> {
        BackendClient::clear_logs(self, kind).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        BackendClient::search(self, query).await
    }

    async fn add_manual(&self, source_id: i64, name: &str) -> Result<AddOutcome, ClientError> {
        BackendClient::add_manual(self, source_id, name).await
    }

    async fn sync_single(
        &self,
        id: i64,
        source: MetadataSource,
    ) -> Result<Option<String>, ClientError> {
        BackendClient::sync_single(self, id, source).await
    }
}
