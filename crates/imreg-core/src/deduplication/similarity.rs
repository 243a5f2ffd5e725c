//! Fuzzy similarity scoring and the corpus scan

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use super::normalization::{normalize_optional_title, normalize_title};
use crate::domain::{ReferenceRecord, SourceRecord};

/// Report of a source record excluded as a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DuplicateMatch {
    /// Source title as it appeared in the export
    pub source_title: String,
    /// Normalized registry title that qualified the match
    pub matched_title: String,
    /// Similarity score of the qualifying match (0-100)
    pub score: u32,
}

/// Result of scanning the source records against the registry corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DeduplicationOutcome {
    /// Source records with no qualifying match, order preserved
    pub new_records: Vec<SourceRecord>,
    /// One report per excluded source record
    pub duplicates: Vec<DuplicateMatch>,
}

/// Similarity between two titles on a 0-100 scale.
///
/// Symmetric, edit-distance-based, maximal for titles whose normalized
/// forms are equal. Two empty titles score 100.
pub fn title_similarity(a: &str, b: &str) -> u32 {
    similarity_score(&normalize_title(a), &normalize_title(b))
}

/// Score two already-normalized titles.
fn similarity_score(norm_a: &str, norm_b: &str) -> u32 {
    (normalized_levenshtein(norm_a, norm_b) * 100.0).round() as u32
}

/// Split the source records into those absent from the registry corpus
/// and reports for those already present.
///
/// Registry titles are normalized once, then scanned in their given order
/// for each source record. The first reference title whose score meets the
/// threshold classifies the record as a duplicate; later, possibly higher
/// scores are never consulted.
pub fn find_new_records(
    source: &[SourceRecord],
    reference: &[ReferenceRecord],
    threshold: u8,
) -> DeduplicationOutcome {
    let reference_titles: Vec<String> = reference
        .iter()
        .map(|record| normalize_optional_title(record.title.as_deref()))
        .collect();

    let mut new_records = Vec::new();
    let mut duplicates = Vec::new();

    for record in source {
        let source_title = normalize_optional_title(record.title.as_deref());

        let qualifying = reference_titles.iter().find_map(|reference_title| {
            let score = similarity_score(&source_title, reference_title);
            (score >= u32::from(threshold)).then(|| DuplicateMatch {
                source_title: record.title.clone().unwrap_or_default(),
                matched_title: reference_title.clone(),
                score,
            })
        });

        match qualifying {
            Some(report) => duplicates.push(report),
            None => new_records.push(record.clone()),
        }
    }

    DeduplicationOutcome {
        new_records,
        duplicates,
    }
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn title_similarity_export(a: String, b: String) -> u32 {
    title_similarity(&a, &b)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn find_new_records_export(
    source: Vec<SourceRecord>,
    reference: Vec<ReferenceRecord>,
    threshold: u8,
) -> DeduplicationOutcome {
    find_new_records(&source, &reference, threshold)
}
