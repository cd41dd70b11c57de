//! Inventory analysis building blocks.
//!
//! Everything the report and filter commands compute lives here:
//!
//! - **Preview**: the first few items rendered with placeholder substitution
//! - **Distribution**: occurrence counts of the `type` field
//! - **Search**: case-insensitive keyword substring matching
//! - **Filter**: removal of keyword-matching items from a document

mod distribution;
mod filter;
mod preview;
mod search;

pub use distribution::{TypeCount, TypeDistribution, UNKNOWN_TYPE};
pub use filter::{DEFAULT_FILTER_KEYWORDS, FilterOutcome, RemovedItem, filter_items};
pub use preview::{PREVIEW_LIMIT, PreviewRow, preview};
pub use search::{
    DEFAULT_SEARCH_KEYWORDS, KeywordMatch, KeywordMatcher, MATCH_DISPLAY_LIMIT, SearchScope,
};
