//! End-to-end flow: load a file from disk and run every analysis stage.

use std::fs;
use std::path::PathBuf;

use inv_ingest::load_inventory;
use inv_report::{KeywordMatcher, SearchScope, TypeDistribution, preview};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("inv_cli_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn empty_inventory_reports_zero_everywhere() {
    let dir = temp_dir();
    let path = dir.join("friend.json");
    fs::write(&path, r#"{"descriptions": []}"#).expect("write fixture");

    let document = load_inventory(&path).expect("load inventory");
    let items = &document.descriptions;
    assert_eq!(items.len(), 0);
    assert!(preview(items).is_empty());

    let distribution = TypeDistribution::from_items(items);
    assert!(distribution.is_empty());
    assert_eq!(distribution.total(), 0);

    let matcher = KeywordMatcher::with_default_keywords(SearchScope::Record);
    assert!(matcher.search(items).is_empty());

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn full_report_inputs_from_mixed_inventory() {
    let dir = temp_dir();
    let path = dir.join("friend.json");
    fs::write(
        &path,
        r#"{"success": 1, "descriptions": [
            {"name": "Treasury of the Crimson Witness", "type": "treasure", "classid": "100", "tradable": true},
            {"name": "Banner of the Dire", "type": "banner", "classid": "101", "tradable": false},
            {"name": "Загрузочный экран Тьмы", "type": "loading screen", "classid": "102"},
            {"name": "Banner of the Radiant", "type": "banner", "classid": "103", "tradable": true}
        ]}"#,
    )
    .expect("write fixture");

    let document = load_inventory(&path).expect("load inventory");
    let items = &document.descriptions;
    assert_eq!(items.len(), 4);

    let rows = preview(items);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].tradable, "N/A");

    let distribution = TypeDistribution::from_items(items);
    let entries: Vec<(&str, usize)> = distribution
        .entries()
        .iter()
        .map(|entry| (entry.label.as_str(), entry.count))
        .collect();
    assert_eq!(
        entries,
        vec![("banner", 2), ("treasure", 1), ("loading screen", 1)]
    );

    let matcher = KeywordMatcher::with_default_keywords(SearchScope::Record);
    let matches = matcher.search(items);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].keyword, "treasury");
    assert_eq!(matches[1].keyword, "loading");

    fs::remove_dir_all(&dir).expect("cleanup");
}
