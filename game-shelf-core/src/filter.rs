//! Catalog filtering.
//!
//! [`FilterState`] holds every user-selectable filter. [`apply_filters`] turns
//! a record slice plus a filter state into the ordered list of indices that
//! survive, so the filtered view never owns copies of records.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::record::GameRecord;
use crate::sort::{SortKey, sort_indices};

// ── Player mode ─────────────────────────────────────────────────────────────

/// Tag-based multiplayer filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    Local,
    Online,
    Singleplayer,
}

impl PlayerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerMode::Local => "local",
            PlayerMode::Online => "online",
            PlayerMode::Singleplayer => "singleplayer",
        }
    }

    pub fn matches(&self, record: &GameRecord) -> bool {
        match self {
            PlayerMode::Local => record.is_local_coop(),
            PlayerMode::Online => record.is_online_coop(),
            PlayerMode::Singleplayer => record.is_singleplayer(),
        }
    }
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(PlayerMode::Local),
            "online" => Ok(PlayerMode::Online),
            "singleplayer" | "single" => Ok(PlayerMode::Singleplayer),
            _ => Err(CoreError::UnknownPlayerMode(s.to_string())),
        }
    }
}

// ── Player count ────────────────────────────────────────────────────────────

/// Combined player-count selector (`"1"`, `"local_N"`, `"online_N"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCount {
    /// Both local and online maximums absent or at most one.
    SingleOnly,
    LocalAtLeast(u32),
    OnlineAtLeast(u32),
}

impl PlayerCount {
    pub fn matches(&self, record: &GameRecord) -> bool {
        match *self {
            PlayerCount::SingleOnly => {
                record.local_players_max().is_none_or(|m| m <= 1)
                    && record.online_players_max().is_none_or(|m| m <= 1)
            }
            PlayerCount::LocalAtLeast(n) => record.local_players_max().is_some_and(|m| m >= n),
            PlayerCount::OnlineAtLeast(n) => record.online_players_max().is_some_and(|m| m >= n),
        }
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCount::SingleOnly => f.write_str("1"),
            PlayerCount::LocalAtLeast(n) => write!(f, "local_{}", n),
            PlayerCount::OnlineAtLeast(n) => write!(f, "online_{}", n),
        }
    }
}

impl FromStr for PlayerCount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "1" {
            return Ok(PlayerCount::SingleOnly);
        }
        let invalid = || CoreError::InvalidPlayerCount(s.to_string());
        let (prefix, n) = trimmed.split_once('_').ok_or_else(invalid)?;
        let n: u32 = n.parse().map_err(|_| invalid())?;
        if n == 0 {
            return Err(invalid());
        }
        match prefix {
            "local" => Ok(PlayerCount::LocalAtLeast(n)),
            "online" => Ok(PlayerCount::OnlineAtLeast(n)),
            _ => Err(invalid()),
        }
    }
}

// ── Filter state ────────────────────────────────────────────────────────────

/// Every active filter plus the sort key. Filters combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive title substring; empty passes everything.
    pub query: String,
    pub genre: Option<String>,
    pub player_mode: Option<PlayerMode>,
    pub player_count: Option<PlayerCount>,
    /// Minimum local players. `1` means "single-player locally".
    pub local_players: Option<u32>,
    /// Minimum online players. `1` means "single-player online".
    pub online_players: Option<u32>,
    pub sort: SortKey,
}

impl FilterState {
    /// Reset every filter and the sort key.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// True when no filter is set (the sort key is not a filter).
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.genre.is_none()
            && self.player_mode.is_none()
            && self.player_count.is_none()
            && self.local_players.is_none()
            && self.online_players.is_none()
    }

    /// Whether `record` passes every active filter.
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.matches_query(record)
            && self.matches_genre(record)
            && self.player_mode.is_none_or(|m| m.matches(record))
            && self.player_count.is_none_or(|c| c.matches(record))
            && threshold_matches(self.local_players, record.local_players_max())
            && threshold_matches(self.online_players, record.online_players_max())
    }

    fn matches_query(&self, record: &GameRecord) -> bool {
        self.query.is_empty()
            || record
                .title()
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }

    fn matches_genre(&self, record: &GameRecord) -> bool {
        match self.genre.as_deref() {
            None | Some("") => true,
            Some(genre) => record.genres().iter().any(|g| g == genre),
        }
    }
}

/// Explicit per-kind player threshold: `1` keeps single-player records
/// (max absent or exactly one), `N > 1` keeps records whose max is at least N.
fn threshold_matches(threshold: Option<u32>, max: Option<u32>) -> bool {
    match threshold {
        None | Some(0) => true,
        Some(1) => max.is_none_or(|m| m == 1),
        Some(n) => max.is_some_and(|m| m >= n),
    }
}

/// Indices into `records` that pass `filters`, ordered by `filters.sort`.
pub fn apply_filters(records: &[GameRecord], filters: &FilterState) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| filters.matches(r))
        .map(|(i, _)| i)
        .collect();
    sort_indices(records, &mut indices, filters.sort);
    indices
}

/// Borrowing convenience over [`apply_filters`].
pub fn filter_records<'a>(records: &'a [GameRecord], filters: &FilterState) -> Vec<&'a GameRecord> {
    apply_filters(records, filters)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
