//! Pipeline orchestration
//!
//! Applies the year and title filters, removes records already present in
//! the registry corpus, and enriches the remainder with affiliated authors
//! and resolved departments, accumulating per-stage statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affiliation::extract_affiliated_authors;
use crate::config::PipelineConfig;
use crate::deduplication::{find_new_records, DuplicateMatch};
use crate::departments::{resolve_departments, HighlightReason};
use crate::domain::{
    DepartmentMappingEntry, PipelineStats, ReferenceRecord, ResultRecord, SourceRecord,
};
use crate::error::PipelineError;

/// Everything one reconciliation run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct PipelineOutcome {
    /// Enriched records, one per new article with affiliated authors
    pub records: Vec<ResultRecord>,
    /// One report per record excluded as a duplicate
    pub duplicates: Vec<DuplicateMatch>,
    pub stats: PipelineStats,
}

/// Run the reconciliation pipeline over one batch of records.
///
/// Stages, in order: year filter, title-exclusion filter, duplicate
/// detection, affiliated-author extraction, department resolution. Records
/// failing a stage are dropped and counted, never treated as errors; the
/// only fallible input is an out-of-range threshold.
pub fn process(
    source: &[SourceRecord],
    reference: &[ReferenceRecord],
    departments: &[DepartmentMappingEntry],
    config: &PipelineConfig,
) -> Result<PipelineOutcome, PipelineError> {
    config.validate()?;

    let mut stats = PipelineStats {
        original_scopus_count: source.len() as u32,
        original_registry_count: reference.len() as u32,
        ..Default::default()
    };

    // Year filter applies to both sides; records without a year never
    // match a requested year.
    let (source, reference) = match &config.year_filter {
        Some(years) => {
            let source: Vec<SourceRecord> = source
                .iter()
                .filter(|record| record.year.is_some_and(|y| years.contains(&y)))
                .cloned()
                .collect();
            let reference: Vec<ReferenceRecord> = reference
                .iter()
                .filter(|record| record.year.is_some_and(|y| years.contains(&y)))
                .cloned()
                .collect();
            (source, reference)
        }
        None => (source.to_vec(), reference.to_vec()),
    };
    stats.after_year_filter_scopus = source.len() as u32;
    stats.after_year_filter_registry = reference.len() as u32;

    let source = if config.title_exclude_keywords.is_empty() {
        stats.after_title_filter = source.len() as u32;
        source
    } else {
        let before = source.len();
        let kept: Vec<SourceRecord> = source
            .into_iter()
            .filter(|record| {
                keep_by_title(record.title.as_deref(), &config.title_exclude_keywords)
            })
            .collect();
        stats.excluded_by_title = (before - kept.len()) as u32;
        stats.after_title_filter = kept.len() as u32;
        kept
    };
    debug!(
        scopus = stats.after_year_filter_scopus,
        registry = stats.after_year_filter_registry,
        excluded_by_title = stats.excluded_by_title,
        "filters applied"
    );

    let outcome = find_new_records(&source, &reference, config.threshold);
    stats.new_articles = outcome.new_records.len() as u32;
    stats.duplicates_found = outcome.duplicates.len() as u32;
    debug!(
        new = stats.new_articles,
        duplicates = stats.duplicates_found,
        "duplicate scan complete"
    );

    let mut records = Vec::new();
    for record in &outcome.new_records {
        let authors = extract_affiliated_authors(
            record.authors_with_affiliations.as_deref(),
            record.author_full_names.as_deref(),
            &config.affiliation_keywords,
            &config.affiliation_exclude_keywords,
        );
        if authors.count == 0 {
            stats.no_affiliated_authors += 1;
            continue;
        }
        stats.affiliated_articles += 1;

        let resolution = resolve_departments(&authors.authors_short, departments);
        match resolution.reason {
            HighlightReason::NotFound => {
                stats.highlighted_departments += 1;
                stats.highlighted_not_found += 1;
            }
            HighlightReason::Multiple => {
                stats.highlighted_departments += 1;
                stats.highlighted_multiple += 1;
            }
            HighlightReason::None => {}
        }

        records.push(ResultRecord::from_parts(record, &authors, &resolution));
    }
    debug!(
        affiliated = stats.affiliated_articles,
        highlighted = stats.highlighted_departments,
        "enrichment complete"
    );

    Ok(PipelineOutcome {
        records,
        duplicates: outcome.duplicates,
        stats,
    })
}

/// Title-exclusion predicate; absent titles are always kept.
fn keep_by_title(title: Option<&str>, exclude_keywords: &[String]) -> bool {
    let Some(title) = title else {
        return true;
    };
    let title_lower = title.to_lowercase();
    !exclude_keywords
        .iter()
        .any(|keyword| title_lower.contains(&keyword.to_lowercase()))
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn process_records(
    source: Vec<SourceRecord>,
    reference: Vec<ReferenceRecord>,
    departments: Vec<DepartmentMappingEntry>,
    config: PipelineConfig,
) -> Result<PipelineOutcome, PipelineError> {
    process(&source, &reference, &departments, &config)
}
