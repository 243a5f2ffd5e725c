//! Output record model

use serde::{Deserialize, Serialize};

use crate::affiliation::ExtractedAuthors;
use crate::departments::{DepartmentResolution, HighlightReason};

use super::SourceRecord;

/// Constant source marker carried by every result record.
pub const SOURCE_NAME: &str = "Scopus";

/// One enriched record destined for the registry report.
///
/// Passthrough metadata is defaulted to empty strings here, in one place,
/// so nothing downstream has to re-check field presence. The highlight
/// reason is consumed only by the report renderer and is not part of the
/// published column set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ResultRecord {
    /// Resolved department(s), "; "-joined
    pub department: String,
    /// Institution-affiliated authors in short form
    pub affiliated_authors: String,
    /// All authors of the record, as exported
    pub all_authors: String,
    /// All author full names with identifiers, as exported
    pub all_author_full_names: String,
    pub title: String,
    pub year: Option<i32>,
    pub source_title: String,
    pub volume: String,
    pub issue: String,
    pub article_number: String,
    pub page_start: String,
    pub page_end: String,
    pub page_count: String,
    /// Always [`SOURCE_NAME`]
    pub source: String,
    /// Why the record needs manual review, if it does
    pub highlight: HighlightReason,
}

impl ResultRecord {
    /// Assemble a result record from a surviving source record and the
    /// values derived for it.
    pub(crate) fn from_parts(
        record: &SourceRecord,
        authors: &ExtractedAuthors,
        resolution: &DepartmentResolution,
    ) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            department: resolution.department.clone(),
            affiliated_authors: authors.authors_short.clone(),
            all_authors: field(&record.authors),
            all_author_full_names: field(&record.author_full_names),
            title: field(&record.title),
            year: record.year,
            source_title: field(&record.source_title),
            volume: field(&record.volume),
            issue: field(&record.issue),
            article_number: field(&record.article_number),
            page_start: field(&record.page_start),
            page_end: field(&record.page_end),
            page_count: field(&record.page_count),
            source: SOURCE_NAME.to_string(),
            highlight: resolution.reason,
        }
    }

    /// Whether the report renderer must shade this record's department cell.
    pub fn needs_highlight(&self) -> bool {
        self.highlight != HighlightReason::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_applies_defaults() {
        let record = SourceRecord::new("A Paper").with_year(2025);
        let authors = ExtractedAuthors {
            authors_short: "Smith, J.".to_string(),
            authors_with_ids: "Smith, John (123)".to_string(),
            authors_full: "Smith, John".to_string(),
            count: 1,
        };
        let resolution = DepartmentResolution {
            department: "Computer Science".to_string(),
            reason: HighlightReason::None,
            unresolved_authors: vec![],
        };

        let result = ResultRecord::from_parts(&record, &authors, &resolution);
        assert_eq!(result.title, "A Paper");
        assert_eq!(result.year, Some(2025));
        assert_eq!(result.volume, "");
        assert_eq!(result.source, SOURCE_NAME);
        assert!(!result.needs_highlight());
    }
}
