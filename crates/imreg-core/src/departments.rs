//! Author-to-department resolution
//!
//! Maps short-form author names against the department table and decides
//! whether the resulting record needs manual review.

use serde::{Deserialize, Serialize};

use crate::domain::DepartmentMappingEntry;

/// Why a result record's department cell needs manual review.
///
/// Exactly three states, so the report renderer can match exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum HighlightReason {
    /// No review needed
    #[default]
    None,
    /// At least one author has no row in the department table
    NotFound,
    /// The record's authors resolved to more than one department
    Multiple,
}

/// Outcome of resolving one record's affiliated authors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DepartmentResolution {
    /// Departments in first-occurrence order, deduplicated, "; "-joined
    pub department: String,
    pub reason: HighlightReason,
    /// Authors with no matching table row
    pub unresolved_authors: Vec<String>,
}

impl DepartmentResolution {
    /// Whether the department cell must be shaded in the report.
    pub fn needs_highlight(&self) -> bool {
        self.reason != HighlightReason::None
    }
}

/// Resolve a "; "-separated short-author-name string against the
/// department table.
///
/// Matching is a case-insensitive exact comparison against every table
/// row; all matching rows contribute their non-blank departments. An
/// unresolved author forces [`HighlightReason::NotFound`], which takes
/// precedence over [`HighlightReason::Multiple`].
pub fn resolve_departments(
    authors: &str,
    mapping: &[DepartmentMappingEntry],
) -> DepartmentResolution {
    if authors.trim().is_empty() {
        return DepartmentResolution::default();
    }

    let mut departments: Vec<String> = Vec::new();
    let mut unresolved_authors = Vec::new();

    for author in authors.split(';').map(str::trim).filter(|a| !a.is_empty()) {
        let author_lower = author.to_lowercase();
        let mut found = false;

        for entry in mapping {
            if entry.author_name.to_lowercase() != author_lower {
                continue;
            }
            found = true;
            if let Some(department) = entry
                .department
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
            {
                if !departments.iter().any(|d| d == department) {
                    departments.push(department.to_string());
                }
            }
        }

        if !found {
            unresolved_authors.push(author.to_string());
        }
    }

    let reason = if !unresolved_authors.is_empty() {
        HighlightReason::NotFound
    } else if departments.len() > 1 {
        HighlightReason::Multiple
    } else {
        HighlightReason::None
    };

    DepartmentResolution {
        department: departments.join("; "),
        reason,
        unresolved_authors,
    }
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn resolve_departments_export(
    authors: String,
    mapping: Vec<DepartmentMappingEntry>,
) -> DepartmentResolution {
    resolve_departments(&authors, &mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<DepartmentMappingEntry> {
        vec![
            DepartmentMappingEntry::new("Smith, J.", "Computer Science"),
            DepartmentMappingEntry::new("Smith, J.", "Mathematics"),
            DepartmentMappingEntry::new("Doe, J.", "Computer Science"),
            DepartmentMappingEntry::unassigned("Brown, A."),
        ]
    }

    #[test]
    fn test_single_department() {
        let resolution = resolve_departments("Doe, J.", &table());
        assert_eq!(resolution.department, "Computer Science");
        assert_eq!(resolution.reason, HighlightReason::None);
        assert!(!resolution.needs_highlight());
    }

    #[test]
    fn test_multiple_departments_flagged() {
        let resolution = resolve_departments("Smith, J.", &table());
        assert_eq!(resolution.department, "Computer Science; Mathematics");
        assert_eq!(resolution.reason, HighlightReason::Multiple);
        assert!(resolution.needs_highlight());
    }

    #[test]
    fn test_unknown_author_flagged_not_found() {
        let resolution = resolve_departments("Nobody, X.", &table());
        assert_eq!(resolution.department, "");
        assert_eq!(resolution.reason, HighlightReason::NotFound);
        assert_eq!(resolution.unresolved_authors, vec!["Nobody, X."]);
    }

    #[test]
    fn test_not_found_supersedes_multiple() {
        let resolution = resolve_departments("Smith, J.; Nobody, X.", &table());
        assert_eq!(resolution.department, "Computer Science; Mathematics");
        assert_eq!(resolution.reason, HighlightReason::NotFound);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let resolution = resolve_departments("smith, j.", &table());
        assert_eq!(resolution.reason, HighlightReason::Multiple);
    }

    #[test]
    fn test_blank_department_rows_count_as_found() {
        // Brown has a table row, so no NotFound; the blank cell just
        // contributes nothing.
        let resolution = resolve_departments("Brown, A.", &table());
        assert_eq!(resolution.department, "");
        assert_eq!(resolution.reason, HighlightReason::None);
    }

    #[test]
    fn test_departments_deduplicated_in_first_occurrence_order() {
        let resolution = resolve_departments("Smith, J.; Doe, J.", &table());
        assert_eq!(resolution.department, "Computer Science; Mathematics");
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let resolution = resolve_departments("  ", &table());
        assert_eq!(resolution, DepartmentResolution::default());
        assert!(!resolution.needs_highlight());
    }
}
