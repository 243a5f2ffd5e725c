//! Per-run statistics counters

use serde::{Deserialize, Serialize};

/// Counters accumulated across the pipeline stages of one run.
///
/// The counters are mutually consistent:
/// `new_articles + duplicates_found == after_title_filter`,
/// `affiliated_articles + no_affiliated_authors == new_articles`, and
/// `highlighted_not_found + highlighted_multiple == highlighted_departments`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct PipelineStats {
    /// Source records as supplied
    pub original_scopus_count: u32,
    /// Registry corpus records as supplied
    pub original_registry_count: u32,
    /// Source records surviving the year filter
    pub after_year_filter_scopus: u32,
    /// Registry records surviving the year filter
    pub after_year_filter_registry: u32,
    /// Source records surviving the title-exclusion filter
    pub after_title_filter: u32,
    /// Source records dropped by the title-exclusion filter
    pub excluded_by_title: u32,
    /// Records with no qualifying match in the registry corpus
    pub new_articles: u32,
    /// Records excluded as duplicates of the registry corpus
    pub duplicates_found: u32,
    /// New records with at least one institution-affiliated author
    pub affiliated_articles: u32,
    /// New records dropped for having no affiliated authors
    pub no_affiliated_authors: u32,
    /// Result records flagged for manual department review
    pub highlighted_departments: u32,
    /// Flagged because an author had no department row
    pub highlighted_not_found: u32,
    /// Flagged because the record resolved to several departments
    pub highlighted_multiple: u32,
}
