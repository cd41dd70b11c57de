use std::path::PathBuf;

use inv_report::{KeywordMatch, PreviewRow, RemovedItem, TypeDistribution};

#[derive(Debug)]
pub struct ReportResult {
    pub source: PathBuf,
    pub total: usize,
    pub preview: Vec<PreviewRow>,
    pub distribution: TypeDistribution,
    pub matches: Vec<KeywordMatch>,
}

#[derive(Debug)]
pub struct FilterResult {
    pub source: PathBuf,
    /// Where the filtered document was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub before: usize,
    pub remaining: usize,
    pub removed: Vec<RemovedItem>,
}
