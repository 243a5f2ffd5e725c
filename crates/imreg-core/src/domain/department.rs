//! Department mapping table entries

use serde::{Deserialize, Serialize};

/// One row of the author-to-department lookup table.
///
/// The same author name may appear in several rows (an author belonging to
/// more than one department), and the department value may be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DepartmentMappingEntry {
    /// Author in short form, "Last, F."
    pub author_name: String,
    pub department: Option<String>,
}

impl DepartmentMappingEntry {
    /// Create a mapping row
    pub fn new(author_name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            department: Some(department.into()),
        }
    }

    /// Create a row whose department cell is blank
    pub fn unassigned(author_name: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            department: None,
        }
    }
}
