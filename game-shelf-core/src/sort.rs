use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::CoreError;
use crate::record::GameRecord;
use crate::score::combined_score;

/// Sort order for the filtered catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by title.
    #[default]
    Title,
    /// Descending by combined score; unscored records last.
    Rating,
    /// Newest first; undated records last.
    ReleaseDate,
    /// Descending by maximum local players.
    LocalPlayers,
    /// Descending by maximum online players.
    OnlinePlayers,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::Rating,
        SortKey::ReleaseDate,
        SortKey::LocalPlayers,
        SortKey::OnlinePlayers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::ReleaseDate => "release_date",
            SortKey::LocalPlayers => "local_players",
            SortKey::OnlinePlayers => "online_players",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownSortKey(s.to_string()))
    }
}

/// Total order between two records under `key`. Callers must use a stable
/// sort so ties keep their prior relative order.
pub fn compare_records(a: &GameRecord, b: &GameRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_titles(a.title(), b.title()),
        SortKey::Rating => {
            let sa = combined_score(a).unwrap_or(0.0);
            let sb = combined_score(b).unwrap_or(0.0);
            sb.total_cmp(&sa)
        }
        SortKey::ReleaseDate => {
            let da = a.source_a.released.as_deref().unwrap_or("");
            let db = b.source_a.released.as_deref().unwrap_or("");
            db.cmp(da)
        }
        SortKey::LocalPlayers => b
            .local_players_max()
            .unwrap_or(0)
            .cmp(&a.local_players_max().unwrap_or(0)),
        SortKey::OnlinePlayers => b
            .online_players_max()
            .unwrap_or(0)
            .cmp(&a.online_players_max().unwrap_or(0)),
    }
}

/// Collation-style title order: letters compare without accents or case
/// first ("Éclipse" sits with the E's). Ties go unaccented before accented,
/// then lowercase before uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    fold_accents(&a_lower)
        .cmp(&fold_accents(&b_lower))
        .then_with(|| a_lower.nfc().cmp(b_lower.nfc()))
        .then_with(|| b.cmp(a))
}

/// Decompose and drop combining marks.
fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Stable in-place sort.
pub fn sort_records(records: &mut [GameRecord], key: SortKey) {
    records.sort_by(|a, b| compare_records(a, b, key));
}

/// Stable sort of indices into `records`.
pub fn sort_indices(records: &[GameRecord], indices: &mut [usize], key: SortKey) {
    indices.sort_by(|&a, &b| compare_records(&records[a], &records[b], key));
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
