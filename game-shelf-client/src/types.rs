//! Request and response shapes for the backend REST surface.

use serde::{Deserialize, Serialize};

use game_shelf_core::de;

/// Fields every backend reply carries alongside its payload.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default, deserialize_with = "de::truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "de::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub error: Option<String>,
}

impl Envelope {
    /// Failure text for a `success: false` reply.
    pub fn failure_text(self) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| "Backend reported a failure".to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GamesBody {
    #[serde(default)]
    pub games: Vec<game_shelf_core::GameRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBody {
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub results: Vec<SearchResult>,
}

/// Server-computed library counts from `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStats {
    #[serde(default)]
    pub total_games: u64,
    #[serde(default)]
    pub synced_games: u64,
    #[serde(default)]
    pub unsynced_games: u64,
    #[serde(default)]
    pub local_multiplayer_games: u64,
    #[serde(default)]
    pub online_multiplayer_games: u64,
}

/// One hit from the external catalog search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source A identifier, used to add the game.
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub metacritic: Option<f64>,
    #[serde(default, deserialize_with = "de::names")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "de::names")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub background_image: Option<String>,
}

/// Media fetched for a manually added game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedMetadata {
    #[serde(default)]
    pub screenshots_count: u32,
    #[serde(default)]
    pub achievements_count: u32,
    #[serde(default)]
    pub trailers_count: u32,
    #[serde(default)]
    pub stores_count: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddBody {
    #[serde(default, deserialize_with = "de::truthy")]
    pub already_exists: bool,
    #[serde(default, deserialize_with = "de::lenient")]
    pub metadata: Option<AddedMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { metadata: Option<AddedMetadata> },
    /// The game was already in the library; nothing changed.
    AlreadyExists,
}

/// Server-side player-count bounds for `GET /games`. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerRange {
    pub min_local: u32,
    pub max_local: u32,
    pub min_online: u32,
    pub max_online: u32,
}

impl PlayerRange {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters to send, skipping unset bounds.
    pub fn query_pairs(&self) -> Vec<(&'static str, u32)> {
        [
            ("min_local_players", self.min_local),
            ("max_local_players", self.max_local),
            ("min_online_players", self.min_online),
            ("max_online_players", self.max_online),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0)
        .collect()
    }
}

// ── Request bodies ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct SyncRequest {
    pub force_resync: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddManualRequest<'a> {
    pub rawg_id: i64,
    pub game_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SyncSingleRequest {
    pub source: &'static str,
}
