//! Catalog record types.
//!
//! A [`GameRecord`] is one entry of the user's library as the backend returns
//! it: a flat JSON object whose metadata columns are prefixed by the external
//! catalog they came from (`rawg__*` for source A, `igdb__*` for source B).
//! The prefixed columns are grouped into [`SourceA`] and [`SourceB`] here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::de;
use crate::error::CoreError;

/// Tags marking local co-op / couch multiplayer support.
pub const LOCAL_COOP_TAGS: [&str; 2] = ["Local Multiplayer", "Local Co-Op"];

/// Tags marking online multiplayer support.
pub const ONLINE_COOP_TAGS: [&str; 2] = ["Online Co-Op", "Multiplayer"];

pub const SINGLEPLAYER_TAG: &str = "Singleplayer";

// ── Record ──────────────────────────────────────────────────────────────────

/// One game in the library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Backend-assigned identifier, stable across reloads.
    pub id: i64,
    #[serde(default, deserialize_with = "de::text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Storefront identifier recorded by the scraper.
    #[serde(rename = "epic_id", default, deserialize_with = "de::text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(flatten)]
    pub source_a: SourceA,
    #[serde(flatten)]
    pub source_b: SourceB,
}

impl GameRecord {
    /// Title for display and sorting; missing titles read as empty.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// True when neither external catalog has been synced for this game.
    pub fn has_no_metadata(&self) -> bool {
        !self.source_a.synced && !self.source_b.synced
    }

    /// Sources this record has been synced with, in display order.
    pub fn synced_sources(&self) -> Vec<MetadataSource> {
        MetadataSource::ALL
            .into_iter()
            .filter(|s| self.is_synced(*s))
            .collect()
    }

    pub fn is_synced(&self, source: MetadataSource) -> bool {
        match source {
            MetadataSource::SourceA => self.source_a.synced,
            MetadataSource::SourceB => self.source_b.synced,
        }
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.source_a.tags.iter().any(|t| t == tag)
    }

    pub fn is_local_coop(&self) -> bool {
        LOCAL_COOP_TAGS.iter().any(|t| self.has_tag(t))
    }

    pub fn is_online_coop(&self) -> bool {
        ONLINE_COOP_TAGS.iter().any(|t| self.has_tag(t))
    }

    pub fn is_singleplayer(&self) -> bool {
        self.has_tag(SINGLEPLAYER_TAG)
    }

    /// Genre names used for filtering and the genre vocabulary.
    pub fn genres(&self) -> &[String] {
        &self.source_a.genres
    }

    /// Maximum local players; zero is treated as unknown.
    pub fn local_players_max(&self) -> Option<u32> {
        self.source_a.local_players_max.filter(|&n| n > 0)
    }

    /// Maximum online players; zero is treated as unknown.
    pub fn online_players_max(&self) -> Option<u32> {
        self.source_a.online_players_max.filter(|&n| n > 0)
    }
}

// ── Source A (rawg__*) ──────────────────────────────────────────────────────

/// Metadata synced from the first external catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceA {
    #[serde(rename = "rawg__synced", default, deserialize_with = "de::truthy")]
    pub synced: bool,
    #[serde(rename = "rawg__id", default, deserialize_with = "de::lenient_i64")]
    pub external_id: Option<i64>,
    /// User rating on a 0-5 scale.
    #[serde(rename = "rawg__rating", default, deserialize_with = "de::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "rawg__ratings_count", default, deserialize_with = "de::lenient_u64")]
    pub ratings_count: Option<u64>,
    /// Critic (metacritic) score on a 0-100 scale.
    #[serde(rename = "rawg__metacritic", default, deserialize_with = "de::lenient_f64")]
    pub metacritic: Option<f64>,
    /// ISO release date (`YYYY-MM-DD`).
    #[serde(rename = "rawg__released", default, deserialize_with = "de::text")]
    pub released: Option<String>,
    #[serde(rename = "rawg__description", default, deserialize_with = "de::text")]
    pub description: Option<String>,
    #[serde(rename = "rawg__background_image", default, deserialize_with = "de::text")]
    pub background_image: Option<String>,
    #[serde(rename = "rawg__website", default, deserialize_with = "de::text")]
    pub website: Option<String>,
    #[serde(rename = "rawg__genres", default, deserialize_with = "de::names")]
    pub genres: Vec<String>,
    #[serde(rename = "rawg__tags", default, deserialize_with = "de::names")]
    pub tags: Vec<String>,
    #[serde(rename = "rawg__platforms", default, deserialize_with = "de::names")]
    pub platforms: Vec<String>,
    #[serde(rename = "rawg__developers", default, deserialize_with = "de::names")]
    pub developers: Vec<String>,
    #[serde(rename = "rawg__publishers", default, deserialize_with = "de::names")]
    pub publishers: Vec<String>,
    #[serde(rename = "rawg__screenshots", default, deserialize_with = "de::media_urls")]
    pub screenshots: Vec<String>,
    #[serde(rename = "rawg__trailers", default, deserialize_with = "de::media_urls")]
    pub trailers: Vec<String>,
    #[serde(rename = "rawg__achievements", default, deserialize_with = "de::lenient_vec")]
    pub achievements: Vec<Achievement>,
    #[serde(rename = "rawg__stores", default, deserialize_with = "de::lenient_vec")]
    pub stores: Vec<StoreLink>,
    /// Average playtime in hours.
    #[serde(rename = "rawg__playtime", default, deserialize_with = "de::lenient_f64")]
    pub playtime: Option<f64>,
    /// How many catalog users added the game.
    #[serde(rename = "rawg__added", default, deserialize_with = "de::lenient_u64")]
    pub added_count: Option<u64>,
    #[serde(rename = "rawg__local_players_min", default, deserialize_with = "de::lenient_u32")]
    pub local_players_min: Option<u32>,
    #[serde(rename = "rawg__local_players_max", default, deserialize_with = "de::lenient_u32")]
    pub local_players_max: Option<u32>,
    #[serde(rename = "rawg__online_players_min", default, deserialize_with = "de::lenient_u32")]
    pub online_players_min: Option<u32>,
    #[serde(rename = "rawg__online_players_max", default, deserialize_with = "de::lenient_u32")]
    pub online_players_max: Option<u32>,
}

// ── Source B (igdb__*) ──────────────────────────────────────────────────────

/// Metadata synced from the second external catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceB {
    #[serde(rename = "igdb__synced", default, deserialize_with = "de::truthy")]
    pub synced: bool,
    #[serde(rename = "igdb__id", default, deserialize_with = "de::lenient_i64")]
    pub external_id: Option<i64>,
    /// Member rating. Usually 0-100, but some rows carry a 0-5 value.
    #[serde(rename = "igdb__rating", default, deserialize_with = "de::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "igdb__rating_count", default, deserialize_with = "de::lenient_u64")]
    pub rating_count: Option<u64>,
    /// Critic aggregate on a 0-100 scale.
    #[serde(rename = "igdb__aggregated_rating", default, deserialize_with = "de::lenient_f64")]
    pub aggregated_rating: Option<f64>,
    #[serde(
        rename = "igdb__aggregated_rating_count",
        default,
        deserialize_with = "de::lenient_u64"
    )]
    pub aggregated_rating_count: Option<u64>,
    #[serde(rename = "igdb__summary", default, deserialize_with = "de::text")]
    pub summary: Option<String>,
    #[serde(rename = "igdb__storyline", default, deserialize_with = "de::text")]
    pub storyline: Option<String>,
    /// Unix timestamp (seconds).
    #[serde(rename = "igdb__first_release_date", default, deserialize_with = "de::lenient_i64")]
    pub first_release_date: Option<i64>,
    #[serde(rename = "igdb__cover", default, deserialize_with = "de::text")]
    pub cover: Option<String>,
    #[serde(rename = "igdb__url", default, deserialize_with = "de::text")]
    pub url: Option<String>,
    #[serde(rename = "igdb__genres", default, deserialize_with = "de::names")]
    pub genres: Vec<String>,
    #[serde(rename = "igdb__platforms", default, deserialize_with = "de::names")]
    pub platforms: Vec<String>,
    #[serde(rename = "igdb__game_modes", default, deserialize_with = "de::names")]
    pub game_modes: Vec<String>,
    #[serde(rename = "igdb__developers", default, deserialize_with = "de::names")]
    pub developers: Vec<String>,
    #[serde(rename = "igdb__publishers", default, deserialize_with = "de::names")]
    pub publishers: Vec<String>,
}

// ── Nested records ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub name: String,
    /// Share of players who unlocked it, as a percentage.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub percent: Option<f64>,
    #[serde(default, deserialize_with = "de::text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// ── Metadata source ─────────────────────────────────────────────────────────

/// One of the two external catalogs a record can be synced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataSource {
    SourceA,
    SourceB,
}

impl MetadataSource {
    pub const ALL: [MetadataSource; 2] = [MetadataSource::SourceA, MetadataSource::SourceB];

    /// Identifier the backend expects in sync requests.
    pub fn slug(&self) -> &'static str {
        match self {
            MetadataSource::SourceA => "rawg",
            MetadataSource::SourceB => "igdb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetadataSource::SourceA => "RAWG",
            MetadataSource::SourceB => "IGDB",
        }
    }
}

impl fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetadataSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rawg" | "a" => Ok(MetadataSource::SourceA),
            "igdb" | "b" => Ok(MetadataSource::SourceB),
            _ => Err(CoreError::UnknownSource(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
