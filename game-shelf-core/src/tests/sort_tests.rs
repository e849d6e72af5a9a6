use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> GameRecord {
    serde_json::from_value(value).unwrap()
}

fn titled(id: i64, title: &str) -> GameRecord {
    record(json!({ "id": id, "title": title }))
}

fn titles(records: &[GameRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title()).collect()
}

#[test]
fn title_sort_ascending_and_stable_on_resort() {
    let mut lib = vec![titled(1, "Zelda"), titled(2, "Adventure"), titled(3, "Mario")];
    sort_records(&mut lib, SortKey::Title);
    assert_eq!(titles(&lib), vec!["Adventure", "Mario", "Zelda"]);
    let before = lib.clone();
    sort_records(&mut lib, SortKey::Title);
    assert_eq!(lib, before);
}

#[test]
fn title_sort_ignores_case() {
    let mut lib = vec![titled(1, "banjo"), titled(2, "Abzu"), titled(3, "Celeste")];
    sort_records(&mut lib, SortKey::Title);
    assert_eq!(titles(&lib), vec!["Abzu", "banjo", "Celeste"]);
}

#[test]
fn missing_title_sorts_first() {
    let mut lib = vec![titled(1, "Abzu"), record(json!({ "id": 2 }))];
    sort_records(&mut lib, SortKey::Title);
    assert_eq!(lib[0].id, 2);
}

#[test]
fn compare_titles_lowercase_first_on_case_tie() {
    assert_eq!(compare_titles("doom", "DOOM"), std::cmp::Ordering::Less);
    assert_eq!(compare_titles("Doom", "Doom"), std::cmp::Ordering::Equal);
}

#[test]
fn title_sort_folds_accents() {
    let mut lib = vec![
        titled(1, "Zelda"),
        titled(2, "\u{00C9}clipse"),
        titled(3, "Doom"),
        titled(4, "Pok\u{00E9}mon Snap"),
        titled(5, "Pokemon X"),
    ];
    sort_records(&mut lib, SortKey::Title);
    assert_eq!(
        titles(&lib),
        vec!["Doom", "\u{00C9}clipse", "Pok\u{00E9}mon Snap", "Pokemon X", "Zelda"]
    );
}

#[test]
fn compare_titles_unaccented_first_on_accent_tie() {
    use std::cmp::Ordering;

    assert_eq!(compare_titles("Pokemon", "Pok\u{00E9}mon"), Ordering::Less);
    // Decomposed accents fold the same way as precomposed ones.
    assert_eq!(compare_titles("E\u{0301}clipse", "Doom"), Ordering::Greater);
    assert_eq!(compare_titles("E\u{0301}clipse", "Fez"), Ordering::Less);
}

#[test]
fn rating_sort_descending_unscored_last() {
    let mut lib = vec![
        record(json!({ "id": 1, "title": "Unrated" })),
        record(json!({ "id": 2, "rawg__metacritic": 70 })),
        record(json!({ "id": 3, "rawg__metacritic": 95 })),
    ];
    sort_records(&mut lib, SortKey::Rating);
    assert_eq!(lib.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn release_date_newest_first_missing_last() {
    let mut lib = vec![
        record(json!({ "id": 1, "rawg__released": "2001-01-01" })),
        record(json!({ "id": 2 })),
        record(json!({ "id": 3, "rawg__released": "2023-05-12" })),
    ];
    sort_records(&mut lib, SortKey::ReleaseDate);
    assert_eq!(lib.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn player_sorts_descending_with_ties_stable() {
    let mut lib = vec![
        record(json!({ "id": 1, "rawg__local_players_max": 2 })),
        record(json!({ "id": 2 })),
        record(json!({ "id": 3, "rawg__local_players_max": 4 })),
        record(json!({ "id": 4, "rawg__local_players_max": 2 })),
    ];
    sort_records(&mut lib, SortKey::LocalPlayers);
    assert_eq!(lib.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 4, 2]);

    sort_records(&mut lib, SortKey::OnlinePlayers);
    assert_eq!(lib.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 4, 2]);
}

#[test]
fn sort_indices_leaves_records_untouched() {
    let lib = vec![titled(1, "b"), titled(2, "a")];
    let mut idx = vec![0, 1];
    sort_indices(&lib, &mut idx, SortKey::Title);
    assert_eq!(idx, vec![1, 0]);
    assert_eq!(lib[0].id, 1);
}

#[test]
fn sort_key_round_trips_through_strings() {
    for key in SortKey::ALL {
        assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
    }
    assert_eq!("release-date".parse::<SortKey>().unwrap(), SortKey::ReleaseDate);
    assert!(matches!(
        "popularity".parse::<SortKey>(),
        Err(CoreError::UnknownSortKey(_))
    ));
}
