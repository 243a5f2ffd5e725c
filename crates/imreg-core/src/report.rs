//! Report projection for the spreadsheet-writing collaborator
//!
//! Turns the result records into a header row, visible data rows, and the
//! set of rows whose department cell must be shaded. Workbook writing and
//! cell styling stay outside this crate; the renderer combines this
//! projection with the configured highlight color token.

use serde::{Deserialize, Serialize};

use crate::domain::ResultRecord;
use crate::error::ReportError;

/// Ordered header row of the published report.
///
/// Spellings match the registry workbook, including the reserved
/// manual-entry columns at the tail; the internal highlight fields are
/// not part of the published set.
pub const REPORT_COLUMNS: &[&str] = &[
    "Departament",
    "Authors",
    "Authors.1",
    "Author full names",
    "Title",
    "Year",
    "Source title",
    "Volume",
    "Issue",
    "Art. No.",
    "Page start",
    "Page end",
    "Page count",
    "Source",
    "Təqdimat",
    "Data",
    "Amount",
    "Quartil",
];

/// Number of trailing columns left blank for manual registry entry.
const RESERVED_COLUMNS: usize = 4;

/// Index of the column shaded when a record needs review.
pub const HIGHLIGHT_COLUMN: u32 = 0;

/// A rendered report: headers, data rows, and shading instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Report {
    pub headers: Vec<String>,
    /// One row of cell values per result record, in record order
    pub rows: Vec<Vec<String>>,
    /// Zero-based indices of rows whose department cell is shaded
    pub highlighted_rows: Vec<u32>,
}

/// Project result records into the published report shape.
///
/// An empty record set is a structured error so the rendering collaborator
/// can surface it instead of writing an empty workbook.
pub fn build_report(records: &[ResultRecord]) -> Result<Report, ReportError> {
    if records.is_empty() {
        return Err(ReportError::EmptyResultSet);
    }

    let mut rows = Vec::with_capacity(records.len());
    let mut highlighted_rows = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.needs_highlight() {
            highlighted_rows.push(index as u32);
        }

        let mut row = vec![
            record.department.clone(),
            record.affiliated_authors.clone(),
            record.all_authors.clone(),
            record.all_author_full_names.clone(),
            record.title.clone(),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
            record.source_title.clone(),
            record.volume.clone(),
            record.issue.clone(),
            record.article_number.clone(),
            record.page_start.clone(),
            record.page_end.clone(),
            record.page_count.clone(),
            record.source.clone(),
        ];
        row.extend(std::iter::repeat(String::new()).take(RESERVED_COLUMNS));
        rows.push(row);
    }

    Ok(Report {
        headers: REPORT_COLUMNS.iter().map(|s| s.to_string()).collect(),
        rows,
        highlighted_rows,
    })
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn build_report_export(records: Vec<ResultRecord>) -> Result<Report, ReportError> {
    build_report(&records)
}
