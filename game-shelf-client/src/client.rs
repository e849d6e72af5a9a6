use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use game_shelf_core::{GameRecord, JobKind, JobStatus, MetadataSource};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{
    AddBody, AddManualRequest, AddOutcome, Envelope, GamesBody, PlayerRange, SearchBody,
    SearchRequest, SearchResult, ServerStats, SyncRequest, SyncSingleRequest,
};

/// HTTP client for the library backend.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ── Catalog ─────────────────────────────────────────────────────────

    pub async fn fetch_games(
        &self,
        range: Option<&PlayerRange>,
    ) -> Result<Vec<GameRecord>, ClientError> {
        let mut req = self.http.get(self.url("games"));
        if let Some(range) = range {
            req = req.query(&range.query_pairs());
        }
        let (body, _) = self.send::<GamesBody>(req).await?;
        log::debug!("Fetched {} games", body.games.len());
        Ok(body.games)
    }

    pub async fn fetch_stats(&self) -> Result<ServerStats, ClientError> {
        let (stats, _) = self.send(self.http.get(self.url("stats"))).await?;
        Ok(stats)
    }

    // ── Jobs ────────────────────────────────────────────────────────────

    /// Start the source A sync. Returns the backend's acknowledgement text.
    pub async fn start_sync(&self, force_resync: bool) -> Result<Option<String>, ClientError> {
        self.post_ack("sync", Some(&SyncRequest { force_resync })).await
    }

    pub async fn start_sync_source_b(&self) -> Result<Option<String>, ClientError> {
        self.post_ack::<()>("sync-igdb", None).await
    }

    /// Scrape phase one: open the storefront in a browser for login.
    pub async fn open_browser(&self) -> Result<Option<String>, ClientError> {
        self.post_ack::<()>("open-chrome", None).await
    }

    /// Scrape phase two: start parsing the logged-in library.
    pub async fn start_parsing(&self) -> Result<Option<String>, ClientError> {
        self.post_ack::<()>("start-parsing", None).await
    }

    pub async fn job_status(&self, kind: JobKind) -> Result<JobStatus, ClientError> {
        let path = format!("status/{}", kind.slug());
        let (status, _) = self.send(self.http.get(self.url(&path))).await?;
        Ok(status)
    }

    pub async fn clear_logs(&self, kind: JobKind) -> Result<Option<String>, ClientError> {
        self.post_ack::<()>(&format!("clear-logs/{}", kind.slug()), None)
            .await
    }

    // ── Search / add ────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let query = validate_query(query)?;
        let req = self
            .http
            .post(self.url("search-game"))
            .json(&SearchRequest { query });
        let (body, _) = self.send::<SearchBody>(req).await?;
        Ok(body.results)
    }

    pub async fn add_manual(&self, source_id: i64, name: &str) -> Result<AddOutcome, ClientError> {
        let req = self.http.post(self.url("add-manual-game")).json(&AddManualRequest {
            rawg_id: source_id,
            game_name: name,
        });
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        decode_add(status, &text)
    }

    pub async fn sync_single(
        &self,
        id: i64,
        source: MetadataSource,
    ) -> Result<Option<String>, ClientError> {
        self.post_ack(
            &format!("sync-single-game/{}", id),
            Some(&SyncSingleRequest {
                source: source.slug(),
            }),
        )
        .await
    }

    // ── Transport ───────────────────────────────────────────────────────

    async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<String>, ClientError> {
        let mut req = self.http.post(self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let (_, message) = self.send::<Value>(req).await?;
        Ok(message)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<(T, Option<String>), ClientError> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        decode(status, &text)
    }
}

/// Trimmed search text; empty queries are refused before any request.
pub(crate) fn validate_query(query: &str) -> Result<&str, ClientError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ClientError::InvalidInput(
            "Please enter a game name to search".to_string(),
        ));
    }
    Ok(query)
}

fn snippet(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(200)
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

fn parse_value(status: u16, text: &str) -> Result<Value, ClientError> {
    serde_json::from_str(text).map_err(|e| {
        if (200..300).contains(&status) {
            ClientError::malformed(format!("{e}. Response: {}", snippet(text)))
        } else {
            ClientError::Status {
                status,
                message: snippet(text).to_string(),
            }
        }
    })
}

fn envelope(value: &Value) -> Result<Envelope, ClientError> {
    if !value.is_object() {
        return Err(ClientError::malformed(format!(
            "expected a JSON object, got {}",
            snippet(&value.to_string())
        )));
    }
    Envelope::deserialize(value)
        .map_err(|e| ClientError::malformed(format!("bad reply envelope: {e}")))
}

/// Apply the reply envelope rule to a raw response: unparsable bodies are
/// `Malformed` (or `Status` for non-2xx), `success: false` is `Rejected`,
/// anything else must match `T`.
pub(crate) fn decode<T: DeserializeOwned>(
    status: u16,
    text: &str,
) -> Result<(T, Option<String>), ClientError> {
    let value = parse_value(status, text)?;
    let env = envelope(&value)?;
    if !env.success {
        return Err(ClientError::Rejected(env.failure_text()));
    }
    let message = env.message;
    let body = serde_json::from_value(value)
        .map_err(|e| ClientError::malformed(format!("{e}. Response: {}", snippet(text))))?;
    Ok((body, message))
}

/// Like [`decode`], except an `already_exists` reply is an outcome rather
/// than a rejection.
pub(crate) fn decode_add(status: u16, text: &str) -> Result<AddOutcome, ClientError> {
    let value = parse_value(status, text)?;
    let env = envelope(&value)?;
    let body: AddBody = serde_json::from_value(value).unwrap_or_default();
    if body.already_exists {
        return Ok(AddOutcome::AlreadyExists);
    }
    if !env.success {
        return Err(ClientError::Rejected(env.failure_text()));
    }
    Ok(AddOutcome::Added {
        metadata: body.metadata,
    })
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
