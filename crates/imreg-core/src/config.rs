//! Pipeline configuration
//!
//! An explicit value passed into the pipeline entry point; there are no
//! module-level mutable defaults, so several configurations can coexist
//! in one process and be tested independently.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Similarity threshold used when none is supplied by the operator.
pub const DEFAULT_FUZZY_MATCH_THRESHOLD: u8 = 90;

/// Keywords marking an affiliation block as belonging to the institution.
pub const DEFAULT_AFFILIATION_KEYWORDS: &[&str] =
    &["Khazar University", "Khazar", "Xəzər Universiteti"];

/// Title substrings excluding editorial notices from processing.
pub const DEFAULT_TITLE_EXCLUDE_KEYWORDS: &[&str] = &[
    "Correction:",
    "Correction to:",
    "Erratum to",
    "Corrigendum to",
    "<FOR VERIFICATION>",
];

/// RGB hex token the report renderer uses for shaded cells.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "FFFF00";

/// Configuration for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct PipelineConfig {
    /// Duplicate-detection similarity threshold, 0-100 inclusive
    pub threshold: u8,
    /// Years to retain; `None` disables year filtering
    pub year_filter: Option<Vec<i32>>,
    /// Case-insensitive substrings dropping records by title
    pub title_exclude_keywords: Vec<String>,
    /// Keywords accepting an affiliation block
    pub affiliation_keywords: Vec<String>,
    /// Keywords rejecting an otherwise-accepted affiliation block
    pub affiliation_exclude_keywords: Vec<String>,
    /// Highlight color token handed through to the report renderer
    pub highlight_color: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_MATCH_THRESHOLD,
            year_filter: None,
            title_exclude_keywords: owned(DEFAULT_TITLE_EXCLUDE_KEYWORDS),
            affiliation_keywords: owned(DEFAULT_AFFILIATION_KEYWORDS),
            affiliation_exclude_keywords: Vec::new(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Check the threshold bound. The 0-100 range is the only semantic
    /// validation the configuration carries.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.threshold > 100 {
            return Err(PipelineError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }

    /// Builder method to set the similarity threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method to retain only the given years
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.year_filter = Some(years.into_iter().collect());
        self
    }

    /// Builder method to replace the affiliation keyword list
    pub fn with_affiliation_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.affiliation_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to replace the title-exclusion list
    pub fn with_title_exclude_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.title_exclude_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
