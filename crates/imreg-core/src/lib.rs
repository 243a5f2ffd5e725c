//! imreg-core: reconciliation core for the imreg publication registry
//!
//! This library provides pure Rust implementations of:
//! - Title normalization and fuzzy duplicate detection against the
//!   curated registry corpus
//! - Affiliation-based author extraction from Scopus export fields
//! - Author-to-department resolution with manual-review flagging
//! - The batch pipeline tying the stages together with per-stage
//!   statistics
//! - Report projection for the spreadsheet-writing collaborator
//!
//! File loading, the interactive control surface, and workbook writing
//! live outside this crate; with the `native` feature the pipeline is
//! exposed to them via UniFFI bindings.

pub mod affiliation;
pub mod config;
pub mod deduplication;
pub mod departments;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod report;

// Re-export main types for convenience
pub use affiliation::{extract_affiliated_authors, ExtractedAuthors};
pub use config::{
    PipelineConfig, DEFAULT_AFFILIATION_KEYWORDS, DEFAULT_FUZZY_MATCH_THRESHOLD,
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_TITLE_EXCLUDE_KEYWORDS,
};
pub use deduplication::{
    find_new_records, normalize_title, title_similarity, DeduplicationOutcome, DuplicateMatch,
};
pub use departments::{resolve_departments, DepartmentResolution, HighlightReason};
pub use domain::{
    DepartmentMappingEntry, PipelineStats, ReferenceRecord, ResultRecord, SourceRecord,
    SOURCE_NAME,
};
pub use error::{PipelineError, ReportError};
pub use pipeline::{process, PipelineOutcome};
pub use report::{build_report, Report, HIGHLIGHT_COLUMN, REPORT_COLUMNS};

// Setup UniFFI - use proc macros only, no UDL file (native only)
#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

/// Returns the version of imreg-core
#[cfg(feature = "native")]
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
