use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> GameRecord {
    serde_json::from_value(value).unwrap()
}

fn full(view: DetailView) -> GameDetail {
    match view {
        DetailView::Full(detail) => *detail,
        other => panic!("expected full detail, got {other:?}"),
    }
}

#[test]
fn unsynced_record_offers_sync_actions() {
    let view = build_detail(&record(json!({ "id": 4, "title": "Mystery" })));
    assert_eq!(
        view,
        DetailView::NoMetadata {
            id: 4,
            title: "Mystery".into(),
            sync_options: vec![MetadataSource::SourceA, MetadataSource::SourceB],
        }
    );
}

#[test]
fn source_a_fields_preferred() {
    let d = full(build_detail(&record(json!({
        "id": 1,
        "title": "Hades",
        "rawg__synced": 1,
        "rawg__rating": 4.4,
        "rawg__metacritic": 93,
        "rawg__released": "2020-09-17",
        "rawg__description": "Defy the god of the dead.",
        "rawg__genres": ["Action"],
        "rawg__local_players_max": 1,
        "rawg__online_players_min": 2,
        "rawg__online_players_max": 4,
        "igdb__synced": 1,
        "igdb__summary": "Roguelike.",
        "igdb__genres": ["Roguelike"],
        "igdb__rating": 88
    }))));
    assert_eq!(d.rating, "4.4");
    // 88/20 rounds to the same "4.4".
    assert_eq!(d.source_b_rating, None);
    assert_eq!(d.critic_score, Some(93.0));
    assert_eq!(d.release_date, "September 17, 2020");
    assert_eq!(d.description, "Defy the god of the dead.");
    assert_eq!(d.genres, vec!["Action"]);
    assert_eq!(d.local_players, None);
    assert_eq!(d.online_players.as_deref(), Some("2-4P"));
    assert!(d.missing_sources.is_empty());
}

#[test]
fn source_b_rating_hidden_when_equal() {
    let d = full(build_detail(&record(json!({
        "id": 1,
        "rawg__synced": 1,
        "rawg__rating": 4.5,
        "igdb__rating": 90
    }))));
    assert_eq!(d.source_b_rating, None);

    let d = full(build_detail(&record(json!({
        "id": 1,
        "rawg__synced": 1,
        "rawg__rating": 4.5,
        "igdb__rating": 70
    }))));
    assert_eq!(d.source_b_rating.as_deref(), Some("3.5"));
}

#[test]
fn falls_back_to_source_b() {
    let d = full(build_detail(&record(json!({
        "id": 2,
        "title": "Outer Wilds",
        "igdb__synced": true,
        "igdb__summary": "A space mystery.",
        "igdb__first_release_date": 1_559_001_600,
        "igdb__cover": "https://img/cover.jpg",
        "igdb__platforms": [{"name": "PC"}]
    }))));
    assert_eq!(d.description, "A space mystery.");
    assert_eq!(d.release_date, "May 28, 2019");
    assert_eq!(d.image.as_deref(), Some("https://img/cover.jpg"));
    assert_eq!(d.platforms, vec!["PC"]);
    assert_eq!(d.rating, "N/A");
    assert_eq!(d.missing_sources, vec![MetadataSource::SourceA]);
}

#[test]
fn placeholder_description_and_date() {
    let d = full(build_detail(&record(json!({ "id": 3, "rawg__synced": 1 }))));
    assert_eq!(d.description, NO_DESCRIPTION);
    assert_eq!(d.release_date, "Unknown");
    assert_eq!(d.combined_score, "N/A");
    assert_eq!(d.missing_sources, vec![MetadataSource::SourceB]);
}

#[test]
fn fractional_playtime_reads_under_an_hour() {
    let d = full(build_detail(&record(json!({
        "id": 9,
        "title": "Short Trip",
        "rawg__synced": true,
        "rawg__playtime": "0.5",
    }))));
    assert_eq!(d.playtime, "< 1 hour");
}
