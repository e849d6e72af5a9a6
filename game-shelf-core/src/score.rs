//! Combined quality score.
//!
//! Blends whichever ratings a record carries into a single 0-100 value,
//! weighting each signal by how many reviews back it.

use crate::record::GameRecord;

/// Weight of the source A user rating when its review count is unknown.
pub const SOURCE_A_DEFAULT_WEIGHT: f64 = 100.0;

/// Weight of each source B rating when its review count is unknown.
pub const SOURCE_B_DEFAULT_WEIGHT: f64 = 50.0;

/// Fixed weight of the critic score.
pub const CRITIC_WEIGHT: f64 = 100.0;

/// Weighted average of the record's ratings on a 0-100 scale, rounded to one
/// decimal. `None` when the record has no rating at all.
///
/// | signal                     | scale          | weight                        |
/// |----------------------------|----------------|-------------------------------|
/// | source A rating            | 0-5, x20       | A review count, else 100      |
/// | source B rating            | x20 if <= 5    | B review count, else 50       |
/// | source B aggregated rating | 0-100          | B review count, else 50       |
/// | critic score               | 0-100          | 100                           |
///
/// Zero ratings and zero counts are treated as missing.
pub fn combined_score(record: &GameRecord) -> Option<f64> {
    let a = &record.source_a;
    let b = &record.source_b;
    let mut signals: Vec<(f64, f64)> = Vec::with_capacity(4);

    if let Some(rating) = present(a.rating) {
        signals.push((rating * 20.0, weight_or(a.ratings_count, SOURCE_A_DEFAULT_WEIGHT)));
    }
    if let Some(rating) = present(b.rating) {
        let scaled = if rating <= 5.0 { rating * 20.0 } else { rating };
        signals.push((scaled, weight_or(b.rating_count, SOURCE_B_DEFAULT_WEIGHT)));
    }
    if let Some(rating) = present(b.aggregated_rating) {
        signals.push((rating, weight_or(b.rating_count, SOURCE_B_DEFAULT_WEIGHT)));
    }
    if let Some(score) = present(a.metacritic) {
        signals.push((score, CRITIC_WEIGHT));
    }

    weighted_mean(&signals).map(round_one_decimal)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn weight_or(count: Option<u64>, default: f64) -> f64 {
    count.filter(|&c| c > 0).map_or(default, |c| c as f64)
}

fn weighted_mean(signals: &[(f64, f64)]) -> Option<f64> {
    let total_weight: f64 = signals.iter().map(|(_, w)| w).sum();
    if signals.is_empty() || total_weight <= 0.0 {
        return None;
    }
    let weighted: f64 = signals.iter().map(|(v, w)| v * w).sum();
    Some(weighted / total_weight)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "tests/score_tests.rs"]
mod tests;
