//! Input record models
//!
//! Both record types arrive already parsed from tabular input; any column
//! absent from the source schema shows up here as `None` and is defaulted
//! to an empty value at result-assembly time, never treated as an error.

use serde::{Deserialize, Serialize};

/// One bibliographic entry from a Scopus export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct SourceRecord {
    pub title: Option<String>,
    pub year: Option<i32>,
    /// All authors in short form, as exported
    pub authors: Option<String>,
    /// Semicolon-delimited "LastName, FirstName (id)" entries
    pub author_full_names: Option<String>,
    /// Semicolon-delimited author blocks with trailing affiliation text
    pub authors_with_affiliations: Option<String>,

    // Passthrough bibliographic metadata
    pub source_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub article_number: Option<String>,
    pub page_start: Option<String>,
    pub page_end: Option<String>,
    pub page_count: Option<String>,
}

impl SourceRecord {
    /// Create a record with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Builder method to set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Builder method to set the short-form author list
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// Builder method to set the full-name/identifier field
    pub fn with_author_full_names(mut self, names: impl Into<String>) -> Self {
        self.author_full_names = Some(names.into());
        self
    }

    /// Builder method to set the author/affiliation field
    pub fn with_affiliations(mut self, blocks: impl Into<String>) -> Self {
        self.authors_with_affiliations = Some(blocks.into());
        self
    }

    /// Builder method to set the journal or source title
    pub fn with_source_title(mut self, source_title: impl Into<String>) -> Self {
        self.source_title = Some(source_title.into());
        self
    }
}

/// An entry of the curated registry corpus, used only for duplicate
/// comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ReferenceRecord {
    pub title: Option<String>,
    pub year: Option<i32>,
}

impl ReferenceRecord {
    /// Create a reference entry with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            year: None,
        }
    }

    /// Builder method to set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}
