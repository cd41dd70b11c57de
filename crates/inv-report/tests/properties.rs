//! Property tests for the analysis invariants.

use proptest::prelude::*;
use serde_json::{Map, json};

use inv_model::{InventoryDocument, ItemRecord};
use inv_report::{
    KeywordMatcher, PREVIEW_LIMIT, SearchScope, TypeDistribution, filter_items, preview,
};

fn item(name: Option<&str>, type_label: Option<&str>) -> ItemRecord {
    let mut fields = Map::new();
    if let Some(name) = name {
        fields.insert("name".to_string(), json!(name));
    }
    if let Some(type_label) = type_label {
        fields.insert("type".to_string(), json!(type_label));
    }
    ItemRecord::new(fields)
}

fn arb_items() -> impl Strategy<Value = Vec<ItemRecord>> {
    prop::collection::vec(
        (
            prop::option::of("[a-z ]{0,12}"),
            prop::option::of(prop::sample::select(vec![
                "tool", "banner", "loading screen", "treasure chest", "ward",
            ])),
        ),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(name, type_label)| item(name.as_deref(), type_label))
            .collect()
    })
}

proptest! {
    #[test]
    fn distribution_counts_sum_to_total(items in arb_items()) {
        let distribution = TypeDistribution::from_items(&items);
        prop_assert_eq!(distribution.total(), items.len());
    }

    #[test]
    fn distribution_counts_never_increase(items in arb_items()) {
        let distribution = TypeDistribution::from_items(&items);
        let counts: Vec<usize> = distribution.entries().iter().map(|e| e.count).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn preview_never_exceeds_limit(items in arb_items()) {
        let rows = preview(&items);
        prop_assert_eq!(rows.len(), items.len().min(PREVIEW_LIMIT));
    }

    #[test]
    fn match_indices_are_strictly_increasing(items in arb_items()) {
        let matcher = KeywordMatcher::with_default_keywords(SearchScope::Record);
        let matches = matcher.search(&items);
        prop_assert!(matches.windows(2).all(|pair| pair[0].index < pair[1].index));
        prop_assert!(matches.iter().all(|m| m.index < items.len()));
    }

    #[test]
    fn filter_partitions_the_collection(items in arb_items()) {
        let matcher = KeywordMatcher::with_default_keywords(SearchScope::Record);
        let before = items.len();
        let matched = matcher.search(&items).len();
        let document = InventoryDocument::default().with_descriptions(items);
        let outcome = filter_items(document, &matcher);
        prop_assert_eq!(outcome.removed.len() + outcome.remaining(), before);
        // The filter removes exactly the records the search reports.
        prop_assert_eq!(outcome.removed.len(), matched);
    }
}
