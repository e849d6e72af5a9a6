//! Detail view for a single record, assembled as plain data.

use crate::format;
use crate::record::{Achievement, GameRecord, MetadataSource, StoreLink};
use crate::score::combined_score;

pub const NO_DESCRIPTION: &str = "No description available.";

/// What to show for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Neither source is synced; offer per-source sync actions instead.
    NoMetadata {
        id: i64,
        title: String,
        sync_options: Vec<MetadataSource>,
    },
    Full(Box<GameDetail>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    /// Source A rating, 0-5, formatted.
    pub rating: String,
    /// Source B rating rescaled to 0-5. `None` when it would repeat `rating`.
    pub source_b_rating: Option<String>,
    pub critic_score: Option<f64>,
    pub combined_score: String,
    pub release_date: String,
    pub description: String,
    pub storyline: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub tags: Vec<String>,
    pub stores: Vec<StoreLink>,
    pub achievements: Vec<Achievement>,
    pub playtime: String,
    pub added_count: String,
    pub local_players: Option<String>,
    pub online_players: Option<String>,
    /// Sources not yet synced, offered as single-game sync actions.
    pub missing_sources: Vec<MetadataSource>,
}

pub fn build_detail(record: &GameRecord) -> DetailView {
    let missing_sources: Vec<MetadataSource> = MetadataSource::ALL
        .into_iter()
        .filter(|s| !record.is_synced(*s))
        .collect();

    if record.has_no_metadata() {
        return DetailView::NoMetadata {
            id: record.id,
            title: record.title().to_string(),
            sync_options: missing_sources,
        };
    }

    let a = &record.source_a;
    let b = &record.source_b;

    let rating = format::format_rating(a.rating);
    let source_b_rating = Some(format::format_source_b_rating(b.rating))
        .filter(|r| r != "N/A" && *r != rating);

    DetailView::Full(Box::new(GameDetail {
        id: record.id,
        title: record.title().to_string(),
        image: a.background_image.clone().or_else(|| b.cover.clone()),
        rating,
        source_b_rating,
        critic_score: a.metacritic.filter(|m| *m > 0.0),
        combined_score: format::format_score(combined_score(record)),
        release_date: release_date(record),
        description: a
            .description
            .clone()
            .or_else(|| b.summary.clone())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        storyline: b.storyline.clone(),
        genres: prefer_a(&a.genres, &b.genres),
        platforms: prefer_a(&a.platforms, &b.platforms),
        developers: prefer_a(&a.developers, &b.developers),
        publishers: prefer_a(&a.publishers, &b.publishers),
        tags: a.tags.clone(),
        stores: a.stores.clone(),
        achievements: a.achievements.clone(),
        playtime: format::format_playtime(a.playtime),
        added_count: format::format_number(a.added_count),
        local_players: format::format_player_count(a.local_players_min, a.local_players_max),
        online_players: format::format_player_count(a.online_players_min, a.online_players_max),
        missing_sources,
    }))
}

fn release_date(record: &GameRecord) -> String {
    if let Some(released) = record.source_a.released.as_deref() {
        return format::format_date(Some(released));
    }
    let iso = record
        .source_b
        .first_release_date
        .and_then(format::timestamp_to_iso);
    format::format_date(iso.as_deref())
}

fn prefer_a(a: &[String], b: &[String]) -> Vec<String> {
    if a.is_empty() { b.to_vec() } else { a.to_vec() }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
