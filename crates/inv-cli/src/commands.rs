use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use inv_ingest::load_inventory;
use inv_model::InventoryDocument;
use inv_report::{
    DEFAULT_FILTER_KEYWORDS, DEFAULT_SEARCH_KEYWORDS, KeywordMatcher, SearchScope,
    TypeDistribution, filter_items, preview,
};

use crate::cli::{FilterArgs, ReportArgs, SearchScopeArg};
use crate::types::{FilterResult, ReportResult};

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let span = info_span!("report", path = %args.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let document = load_inventory(&args.path).context("load inventory")?;
    let items = &document.descriptions;

    let scope = match args.scope {
        SearchScopeArg::Record => SearchScope::Record,
        SearchScopeArg::Name => SearchScope::Name,
    };
    let matcher = build_matcher(&args.keywords, DEFAULT_SEARCH_KEYWORDS, scope);

    let preview = preview(items);
    let distribution = TypeDistribution::from_items(items);
    let matches = matcher.search(items);
    info!(
        items = items.len(),
        types = distribution.entries().len(),
        matched = matches.len(),
        duration_ms = start.elapsed().as_millis(),
        "report complete"
    );

    Ok(ReportResult {
        source: args.path.clone(),
        total: items.len(),
        preview,
        distribution,
        matches,
    })
}

pub fn run_filter(args: &FilterArgs) -> Result<FilterResult> {
    let span = info_span!("filter", path = %args.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let document = load_inventory(&args.path).context("load inventory")?;
    let before = document.item_count();

    // Removal always matches against the whole record.
    let matcher = build_matcher(&args.keywords, DEFAULT_FILTER_KEYWORDS, SearchScope::Record);
    let outcome = filter_items(document, &matcher);

    let output = if args.dry_run {
        None
    } else {
        let target = args.output.clone().unwrap_or_else(|| args.path.clone());
        write_document(&target, &outcome.document)?;
        Some(target)
    };
    info!(
        before,
        removed = outcome.removed.len(),
        remaining = outcome.remaining(),
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "filter complete"
    );

    Ok(FilterResult {
        source: args.path.clone(),
        output,
        before,
        remaining: outcome.remaining(),
        removed: outcome.removed,
    })
}

/// CLI-supplied keywords replace the built-in list; an empty flag list keeps
/// the defaults.
fn build_matcher(keywords: &[String], defaults: &[&str], scope: SearchScope) -> KeywordMatcher {
    if keywords.is_empty() {
        KeywordMatcher::new(defaults.iter().copied(), scope)
    } else {
        KeywordMatcher::new(keywords.iter().map(String::as_str), scope)
    }
}

fn write_document(path: &Path, document: &InventoryDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document).context("serialize filtered document")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_keywords_replace_defaults() {
        let matcher = build_matcher(
            &["Rare".to_string()],
            DEFAULT_SEARCH_KEYWORDS,
            SearchScope::Record,
        );
        assert_eq!(matcher.keywords(), ["rare"]);
    }

    #[test]
    fn empty_keyword_list_keeps_defaults() {
        let matcher = build_matcher(&[], DEFAULT_SEARCH_KEYWORDS, SearchScope::Record);
        assert_eq!(matcher.keywords().len(), DEFAULT_SEARCH_KEYWORDS.len());
        assert_eq!(matcher.keywords()[0], "treasury");
    }
}
