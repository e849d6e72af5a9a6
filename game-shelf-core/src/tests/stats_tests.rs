use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> GameRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_collection_is_all_zero() {
    assert_eq!(derive_stats(&[]), CatalogStats::default());
    assert!(extract_genres(&[]).is_empty());
}

#[test]
fn counts_truthy_sync_flags() {
    let lib = vec![
        record(json!({ "id": 1, "rawg__synced": 1 })),
        record(json!({ "id": 2, "rawg__synced": true, "igdb__synced": "1" })),
        record(json!({ "id": 3, "rawg__synced": 0 })),
    ];
    let stats = derive_stats(&lib);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.synced_source_a, 2);
    assert_eq!(stats.synced_source_b, 1);
    assert_eq!(stats.unsynced, 1);
}

#[test]
fn counts_coop_tags() {
    let lib = vec![
        record(json!({ "id": 1, "rawg__tags": ["Local Co-Op", "Online Co-Op"] })),
        record(json!({ "id": 2, "rawg__tags": [{"name": "Local Multiplayer"}] })),
        record(json!({ "id": 3, "rawg__tags": ["Multiplayer"] })),
        record(json!({ "id": 4, "rawg__tags": ["Co-op"] })),
    ];
    let stats = derive_stats(&lib);
    assert_eq!(stats.local_coop, 2);
    assert_eq!(stats.online_coop, 2);
}

#[test]
fn genres_deduplicated_and_sorted() {
    let lib = vec![
        record(json!({ "id": 1, "rawg__genres": [{"name": "RPG"}, "Action", {"name": "RPG"}] })),
        record(json!({ "id": 2, "rawg__genres": ["Adventure", ""] })),
    ];
    assert_eq!(extract_genres(&lib), vec!["Action", "Adventure", "RPG"]);
}

#[test]
fn genres_independent_of_order() {
    let a = record(json!({ "id": 1, "rawg__genres": ["Puzzle"] }));
    let b = record(json!({ "id": 2, "rawg__genres": ["Indie", "Puzzle"] }));
    assert_eq!(
        extract_genres(&[a.clone(), b.clone()]),
        extract_genres(&[b, a])
    );
}
