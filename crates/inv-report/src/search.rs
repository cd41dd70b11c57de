use tracing::debug;

use inv_model::ItemRecord;

/// Default search terms covering the treasury and loading-screen item
/// families, in both English and Russian (stems, to catch inflections).
pub const DEFAULT_SEARCH_KEYWORDS: &[&str] = &[
    "treasury",
    "treasure",
    "loading",
    "screen",
    "хранилище",
    "сокровищ",
    "загрузочн",
];

/// Maximum number of matches printed in the report.
pub const MATCH_DISPLAY_LIMIT: usize = 10;

/// What part of a record the keyword substring test runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// The whole record serialized to JSON. Brute force: a keyword can match
    /// any field, including numeric IDs that happen to contain the text.
    #[default]
    Record,
    /// The `name` field only.
    Name,
}

/// One record that matched, with the first keyword that hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Position of the record in the source collection.
    pub index: usize,
    pub name: String,
    pub keyword: String,
}

/// Case-insensitive substring matcher over an ordered keyword list.
///
/// Keyword order matters: the first keyword in the list that occurs in a
/// record is the one reported, and later keywords are not tried for that
/// record.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
    scope: SearchScope,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I, scope: SearchScope) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            scope,
        }
    }

    pub fn with_default_keywords(scope: SearchScope) -> Self {
        Self::new(DEFAULT_SEARCH_KEYWORDS.iter().copied(), scope)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    fn haystack(&self, item: &ItemRecord) -> String {
        let text = match self.scope {
            SearchScope::Record => item.serialized_text(),
            SearchScope::Name => item.display_field("name"),
        };
        text.to_lowercase()
    }

    /// First keyword occurring in the item, in keyword-list order.
    pub fn first_match(&self, item: &ItemRecord) -> Option<&str> {
        let haystack = self.haystack(item);
        self.keywords
            .iter()
            .find(|keyword| haystack.contains(keyword.as_str()))
            .map(String::as_str)
    }

    /// Scan the whole collection in order, recording one match per item.
    pub fn search(&self, items: &[ItemRecord]) -> Vec<KeywordMatch> {
        let matches: Vec<KeywordMatch> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.first_match(item).map(|keyword| KeywordMatch {
                    index,
                    name: item.display_field("name"),
                    keyword: keyword.to_string(),
                })
            })
            .collect();
        debug!(
            keywords = self.keywords.len(),
            scanned = items.len(),
            matched = matches.len(),
            "keyword search complete"
        );
        matches
    }
}
