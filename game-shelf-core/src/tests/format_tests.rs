use super::*;

#[test]
fn format_date_long_form() {
    assert_eq!(format_date(Some("1985-10-18")), "October 18, 1985");
    assert_eq!(format_date(Some("2020-09-17T00:00:00Z")), "September 17, 2020");
}

#[test]
fn format_date_missing_and_unparsable() {
    assert_eq!(format_date(None), "Unknown");
    assert_eq!(format_date(Some("")), "Unknown");
    assert_eq!(format_date(Some("TBA")), "TBA");
}

#[test]
fn year_handles_partial_dates() {
    assert_eq!(year(Some("2017-03-03")), Some(2017));
    assert_eq!(year(Some("1998")), Some(1998));
    assert_eq!(year(Some("soon")), None);
    assert_eq!(year(None), None);
}

#[test]
fn timestamp_converts_to_iso() {
    assert_eq!(timestamp_to_iso(0).as_deref(), Some("1970-01-01"));
    assert_eq!(timestamp_to_iso(1_600_300_800).as_deref(), Some("2020-09-17"));
}

#[test]
fn ratings_and_scores() {
    assert_eq!(format_rating(Some(4.44)), "4.4");
    assert_eq!(format_rating(None), "N/A");
    assert_eq!(format_source_b_rating(Some(90.0)), "4.5");
    assert_eq!(format_source_b_rating(Some(0.0)), "N/A");
    assert_eq!(format_score(Some(80.0)), "80.0/100");
    assert_eq!(format_score(None), "N/A");
}

#[test]
fn playtime_pluralizes() {
    assert_eq!(format_playtime(None), "N/A");
    assert_eq!(format_playtime(Some(0.0)), "N/A");
    assert_eq!(format_playtime(Some(1.0)), "1 hour");
    assert_eq!(format_playtime(Some(12.0)), "12 hours");
    assert_eq!(format_playtime(Some(2.5)), "2.5 hours");
}

#[test]
fn playtime_under_an_hour() {
    assert_eq!(format_playtime(Some(0.5)), "< 1 hour");
    assert_eq!(format_playtime(Some(-3.0)), "N/A");
}

#[test]
fn number_grouping() {
    assert_eq!(format_number(Some(7)), "7");
    assert_eq!(format_number(Some(1_000)), "1,000");
    assert_eq!(format_number(Some(1_234_567)), "1,234,567");
    assert_eq!(format_number(Some(0)), "N/A");
    assert_eq!(format_number(None), "N/A");
}

#[test]
fn player_count_badge() {
    assert_eq!(format_player_count(Some(1), Some(4)).as_deref(), Some("1-4P"));
    assert_eq!(format_player_count(None, Some(2)).as_deref(), Some("1-2P"));
    assert_eq!(format_player_count(Some(2), Some(1)), None);
    assert_eq!(format_player_count(None, None), None);
}

#[test]
fn truncate_counts_characters() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly", 7), "exactly");
    assert_eq!(truncate("Pokémon Legends", 7), "Pokémon...");
}
