#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use game_shelf_client::{AddOutcome, Backend, ClientError, PlayerRange, SearchResult, ServerStats};
use game_shelf_core::{GameRecord, JobKind, JobResult, JobStatus, MetadataSource};

/// In-memory backend with scripted replies.
#[derive(Default)]
pub struct FakeBackend {
    pub games: Mutex<Vec<GameRecord>>,
    pub fail_fetch: Mutex<Option<String>>,
    pub fetches: Mutex<Vec<Option<PlayerRange>>>,
    /// Per-job status replies, consumed front to back. The last one repeats.
    pub statuses: Mutex<HashMap<JobKind, VecDeque<Result<JobStatus, String>>>>,
    pub reject_start: Mutex<Option<String>>,
    pub add_outcome: Mutex<Option<AddOutcome>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn with_games(games: Vec<GameRecord>) -> Self {
        let fake = Self::default();
        *fake.games.lock().unwrap() = games;
        fake
    }

    pub fn script(&self, kind: JobKind, replies: Vec<Result<JobStatus, String>>) {
        self.statuses
            .lock()
            .unwrap()
            .insert(kind, replies.into_iter().collect());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn ack(&self, call: &str) -> Result<Option<String>, ClientError> {
        self.record(call);
        match self.reject_start.lock().unwrap().clone() {
            Some(msg) => Err(ClientError::Rejected(msg)),
            None => Ok(Some(format!("{call} accepted"))),
        }
    }
}

pub fn running(logs: &[&str]) -> Result<JobStatus, String> {
    Ok(JobStatus {
        running: true,
        logs: logs.iter().map(|s| s.to_string()).collect(),
        result: None,
    })
}

pub fn finished(success: bool) -> Result<JobStatus, String> {
    Ok(JobStatus {
        running: false,
        logs: vec!["done".to_string()],
        result: Some(JobResult {
            success,
            ..Default::default()
        }),
    })
}

pub fn game(id: i64, title: &str) -> GameRecord {
    GameRecord {
        id,
        title: Some(title.to_string()),
        ..Default::default()
    }
}

impl Backend for FakeBackend {
    async fn fetch_games(&self, range: Option<&PlayerRange>) -> Result<Vec<GameRecord>, ClientError> {
        self.fetches.lock().unwrap().push(range.copied());
        if let Some(msg) = self.fail_fetch.lock().unwrap().clone() {
            return Err(ClientError::Rejected(msg));
        }
        Ok(self.games.lock().unwrap().clone())
    }

    async fn fetch_stats(&self) -> Result<ServerStats, ClientError> {
        let total = self.games.lock().unwrap().len() as u64;
        Ok(ServerStats {
            total_games: total,
            unsynced_games: total,
            ..Default::default()
        })
    }

    async fn start_sync(&self, force_resync: bool) -> Result<Option<String>, ClientError> {
        self.ack(if force_resync { "sync --force" } else { "sync" })
    }

    async fn start_sync_source_b(&self) -> Result<Option<String>, ClientError> {
        self.ack("sync-igdb")
    }

    async fn open_browser(&self) -> Result<Option<String>, ClientError> {
        self.ack("open-chrome")
    }

    async fn start_parsing(&self) -> Result<Option<String>, ClientError> {
        self.ack("start-parsing")
    }

    async fn job_status(&self, kind: JobKind) -> Result<JobStatus, ClientError> {
        self.record(format!("status/{}", kind.slug()));
        let mut statuses = self.statuses.lock().unwrap();
        let queue = statuses.entry(kind).or_default();
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match reply {
            Some(Ok(status)) => Ok(status),
            Some(Err(msg)) => Err(ClientError::Rejected(msg)),
            None => Err(ClientError::Rejected(format!("no status scripted for {}", kind.slug()))),
        }
    }

    async fn clear_logs(&self, kind: JobKind) -> Result<Option<String>, ClientError> {
        self.record(format!("clear-logs/{}", kind.slug()));
        Ok(None)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        self.record(format!("search {query}"));
        Ok(vec![SearchResult {
            id: 3498,
            name: query.to_string(),
            ..Default::default()
        }])
    }

    async fn add_manual(&self, source_id: i64, name: &str) -> Result<AddOutcome, ClientError> {
        self.record(format!("add {source_id} {name}"));
        let outcome = self
            .add_outcome
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(AddOutcome::Added { metadata: None });
        if outcome == (AddOutcome::Added { metadata: None }) {
            self.games.lock().unwrap().push(game(source_id, name));
        }
        Ok(outcome)
    }

    async fn sync_single(&self, id: i64, source: MetadataSource) -> Result<Option<String>, ClientError> {
        self.record(format!("sync-single {id} {}", source.slug()));
        Ok(Some(format!("Synced with {}", source.label())))
    }
}
