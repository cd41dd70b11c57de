use tracing::info;

use inv_model::InventoryDocument;

use crate::search::KeywordMatcher;

/// Default removal terms. Narrower than the search defaults: full phrases
/// only, so removal never hits loosely related items.
pub const DEFAULT_FILTER_KEYWORDS: &[&str] = &[
    "сокровищница",
    "загрузочный экран",
    "treasure chest",
    "loading screen",
];

/// An item dropped by the filter, captured for the summary before the record
/// itself is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedItem {
    pub name: String,
    pub classid: String,
    pub keyword: String,
}

#[derive(Debug)]
pub struct FilterOutcome {
    /// The document with matching items removed and everything else intact.
    pub document: InventoryDocument,
    pub removed: Vec<RemovedItem>,
}

impl FilterOutcome {
    pub fn remaining(&self) -> usize {
        self.document.item_count()
    }
}

/// Drop every item the matcher hits, preserving the order of survivors and
/// all non-`descriptions` top-level fields.
pub fn filter_items(document: InventoryDocument, matcher: &KeywordMatcher) -> FilterOutcome {
    let before = document.item_count();
    let mut removed = Vec::new();
    let mut retained = Vec::with_capacity(before);
    for item in document.descriptions.iter().cloned() {
        match matcher.first_match(&item) {
            Some(keyword) => removed.push(RemovedItem {
                name: item.display_field("name"),
                classid: item.display_field("classid"),
                keyword: keyword.to_string(),
            }),
            None => retained.push(item),
        }
    }
    info!(
        before,
        removed = removed.len(),
        remaining = retained.len(),
        "filter complete"
    );
    FilterOutcome {
        document: document.with_descriptions(retained),
        removed,
    }
}
