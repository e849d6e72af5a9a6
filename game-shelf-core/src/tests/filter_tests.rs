use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> GameRecord {
    serde_json::from_value(value).unwrap()
}

fn library() -> Vec<GameRecord> {
    vec![
        record(json!({
            "id": 1, "title": "Overcooked 2",
            "rawg__genres": ["Simulation"],
            "rawg__tags": ["Local Co-Op", "Online Co-Op"],
            "rawg__local_players_max": 4, "rawg__online_players_max": 4
        })),
        record(json!({
            "id": 2, "title": "Celeste",
            "rawg__genres": [{"name": "Platformer"}],
            "rawg__tags": ["Singleplayer"],
            "rawg__local_players_max": 1
        })),
        record(json!({
            "id": 3, "title": "Deep Rock Galactic",
            "rawg__genres": ["Shooter"],
            "rawg__tags": ["Multiplayer"],
            "rawg__online_players_max": 4
        })),
        record(json!({
            "id": 4, "title": "It Takes Two",
            "rawg__genres": ["Platformer"],
            "rawg__tags": ["Local Multiplayer"],
            "rawg__local_players_max": 2, "rawg__online_players_max": 2
        })),
        record(json!({ "id": 5, "title": "Unsynced Thing" })),
    ]
}

fn ids(records: &[GameRecord], filters: &FilterState) -> Vec<i64> {
    filter_records(records, filters).iter().map(|r| r.id).collect()
}

#[test]
fn empty_filters_keep_everything_sorted_by_title() {
    let lib = library();
    assert_eq!(ids(&lib, &FilterState::default()), vec![2, 3, 4, 1, 5]);
}

#[test]
fn query_is_case_insensitive_substring() {
    let lib = library();
    let filters = FilterState {
        query: "TAKES".into(),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![4]);
}

#[test]
fn genre_filter_matches_unwrapped_names() {
    let lib = library();
    let filters = FilterState {
        genre: Some("Platformer".into()),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![2, 4]);
}

#[test]
fn player_mode_uses_tags() {
    let lib = library();
    let mut filters = FilterState {
        player_mode: Some(PlayerMode::Local),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![4, 1]);
    filters.player_mode = Some(PlayerMode::Online);
    assert_eq!(ids(&lib, &filters), vec![3, 1]);
    filters.player_mode = Some(PlayerMode::Singleplayer);
    assert_eq!(ids(&lib, &filters), vec![2]);
}

#[test]
fn player_count_local_excludes_missing_max() {
    let lib = library();
    let filters = FilterState {
        player_count: Some("local_2".parse().unwrap()),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![4, 1]);
}

#[test]
fn player_count_single_requires_both_maxes_small() {
    let lib = library();
    let filters = FilterState {
        player_count: Some(PlayerCount::SingleOnly),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![2, 5]);
}

#[test]
fn explicit_thresholds() {
    let lib = library();
    let mut filters = FilterState {
        local_players: Some(1),
        ..Default::default()
    };
    // Absent or exactly one.
    assert_eq!(ids(&lib, &filters), vec![2, 3, 5]);

    filters.local_players = Some(3);
    assert_eq!(ids(&lib, &filters), vec![1]);

    filters.local_players = None;
    filters.online_players = Some(2);
    assert_eq!(ids(&lib, &filters), vec![3, 4, 1]);
}

#[test]
fn all_filters_are_anded() {
    let lib = library();
    let filters = FilterState {
        query: "o".into(),
        genre: Some("Platformer".into()),
        player_mode: Some(PlayerMode::Local),
        local_players: Some(2),
        ..Default::default()
    };
    assert_eq!(ids(&lib, &filters), vec![4]);
}

#[test]
fn filtering_is_idempotent_subset() {
    let lib = library();
    let filters = FilterState {
        player_mode: Some(PlayerMode::Online),
        sort: SortKey::OnlinePlayers,
        ..Default::default()
    };
    let first = apply_filters(&lib, &filters);
    let second = apply_filters(&lib, &filters);
    assert_eq!(first, second);
    assert!(first.iter().all(|&i| i < lib.len()));
}

#[test]
fn clear_resets_filters_and_sort() {
    let mut filters = FilterState {
        query: "x".into(),
        genre: Some("RPG".into()),
        player_count: Some(PlayerCount::OnlineAtLeast(4)),
        sort: SortKey::Rating,
        ..Default::default()
    };
    assert!(!filters.is_empty());
    filters.clear();
    assert!(filters.is_empty());
    assert_eq!(filters.sort, SortKey::Title);
}

#[test]
fn player_count_parsing() {
    assert_eq!("1".parse::<PlayerCount>().unwrap(), PlayerCount::SingleOnly);
    assert_eq!(
        "online_8".parse::<PlayerCount>().unwrap(),
        PlayerCount::OnlineAtLeast(8)
    );
    assert_eq!(PlayerCount::LocalAtLeast(3).to_string(), "local_3");
    for bad in ["", "2", "local_", "local_x", "couch_2", "local_0"] {
        assert!(
            matches!(bad.parse::<PlayerCount>(), Err(CoreError::InvalidPlayerCount(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn player_mode_parsing() {
    assert_eq!("Online".parse::<PlayerMode>().unwrap(), PlayerMode::Online);
    assert!(matches!(
        "couch".parse::<PlayerMode>(),
        Err(CoreError::UnknownPlayerMode(_))
    ));
}
