//! Display formatting for catalog fields.
//!
//! Every function takes raw record values (possibly missing) and returns a
//! string ready to show. Missing values render as "N/A" or "Unknown" rather
//! than empty strings.

use chrono::{DateTime, NaiveDate};

/// Format an ISO date as "October 18, 1985". Missing dates read "Unknown";
/// values that don't parse as a date are returned unchanged.
pub fn format_date(date: Option<&str>) -> String {
    match date.filter(|d| !d.is_empty()) {
        None => "Unknown".to_string(),
        Some(d) => match parse_date(d) {
            Some(parsed) => parsed.format("%B %-d, %Y").to_string(),
            None => d.to_string(),
        },
    }
}

/// Year of an ISO date.
pub fn year(date: Option<&str>) -> Option<i32> {
    use chrono::Datelike;

    let d = date?;
    if let Some(parsed) = parse_date(d) {
        return Some(parsed.year());
    }
    // Partial dates ("1998", "1998-10") still carry a usable year.
    d.get(..4)
        .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|y| y.parse().ok())
}

/// Convert a unix timestamp (seconds) to an ISO date.
pub fn timestamp_to_iso(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
}

fn parse_date(d: &str) -> Option<NaiveDate> {
    // Accept full timestamps by looking at the date part only.
    let date_part = d.get(..10).unwrap_or(d);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// A 0-5 rating with one decimal, or "N/A".
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "N/A".to_string(),
    }
}

/// A 0-100 rating rescaled to 0-5 with one decimal. Zero counts as missing.
pub fn format_source_b_rating(rating: Option<f64>) -> String {
    match rating.filter(|r| *r != 0.0) {
        Some(r) => format!("{:.1}", r / 20.0),
        None => "N/A".to_string(),
    }
}

/// Combined score as "87.5/100", or "N/A".
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}/100", s),
        None => "N/A".to_string(),
    }
}

/// Average playtime. Zero, negative or missing reads "N/A".
pub fn format_playtime(hours: Option<f64>) -> String {
    match hours.filter(|h| h.is_finite() && *h > 0.0) {
        None => "N/A".to_string(),
        Some(h) if h < 1.0 => "< 1 hour".to_string(),
        Some(h) if h == 1.0 => "1 hour".to_string(),
        Some(h) => format!("{} hours", h),
    }
}

/// Group digits with commas ("1,234,567"). Zero or missing reads "N/A".
pub fn format_number(n: Option<u64>) -> String {
    let Some(n) = n.filter(|&n| n > 0) else {
        return "N/A".to_string();
    };
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Player-count badge like "1-4P". `None` for single-player (max absent or
/// at most one).
pub fn format_player_count(min: Option<u32>, max: Option<u32>) -> Option<String> {
    let max = max.filter(|&m| m > 1)?;
    let min = min.filter(|&m| m > 0).unwrap_or(1);
    Some(format!("{}-{}P", min, max))
}

/// Truncate to `max_chars` characters, appending "..." when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((idx, _)) => format!("{}...", &text[..idx]),
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
