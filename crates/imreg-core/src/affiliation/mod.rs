//! Institution-affiliated author extraction
//!
//! Parses the semicolon-delimited "Authors with affiliations" field,
//! keeps the authors whose block matches the institution keywords, and
//! pairs them with identifiers from the "Author full names" field.

mod name_index;

use serde::{Deserialize, Serialize};

use name_index::FullNameIndex;

/// Authors accepted by the affiliation filter, in three representations
/// aligned by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ExtractedAuthors {
    /// "Last, F." forms, "; "-joined
    pub authors_short: String,
    /// Full names with identifiers, "; "-joined
    pub authors_with_ids: String,
    /// Full names without identifiers, "; "-joined
    pub authors_full: String,
    /// Number of accepted author blocks
    pub count: u32,
}

/// Extract the authors whose affiliation block matches the institution
/// keywords.
///
/// A block is accepted when any keyword occurs case-insensitively anywhere
/// in its text and no exclusion keyword does. The author's last and first
/// names are the text before the block's first and second commas. A missing
/// affiliation field, or an empty keyword list, accepts nothing.
pub fn extract_affiliated_authors(
    authors_with_affiliations: Option<&str>,
    author_full_names: Option<&str>,
    keywords: &[String],
    exclude_keywords: &[String],
) -> ExtractedAuthors {
    let Some(raw) = authors_with_affiliations else {
        return ExtractedAuthors::default();
    };

    let index = FullNameIndex::parse(author_full_names);

    let mut short_names = Vec::new();
    let mut with_ids = Vec::new();
    let mut full_names = Vec::new();

    for block in raw.split(';') {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if !contains_any_keyword(block, keywords) {
            continue;
        }
        if contains_any_keyword(block, exclude_keywords) {
            continue;
        }

        let mut parts = block.splitn(3, ',');
        let (Some(last_name), Some(first_name)) = (parts.next(), parts.next()) else {
            continue;
        };
        let last_name = last_name.trim();
        let first_name = first_name.trim();
        let first_initial = first_name.chars().next();

        short_names.push(match first_initial {
            Some(initial) => format!("{}, {}.", last_name, initial),
            None => format!("{}, ", last_name),
        });

        match index.lookup(last_name, first_initial) {
            Some(entry) => {
                with_ids.push(format!("{} ({})", entry.full_name, entry.author_id));
                full_names.push(entry.full_name.clone());
            }
            None => {
                // no identifier entry: the raw name pair stands in for both
                let fallback = format!("{}, {}", last_name, first_name);
                with_ids.push(fallback.clone());
                full_names.push(fallback);
            }
        }
    }

    ExtractedAuthors {
        count: short_names.len() as u32,
        authors_short: short_names.join("; "),
        authors_with_ids: with_ids.join("; "),
        authors_full: full_names.join("; "),
    }
}

/// Case-insensitive substring test against every keyword.
fn contains_any_keyword(block: &str, keywords: &[String]) -> bool {
    let block_lower = block.to_lowercase();
    keywords
        .iter()
        .any(|keyword| block_lower.contains(&keyword.to_lowercase()))
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn extract_affiliated_authors_export(
    authors_with_affiliations: Option<String>,
    author_full_names: Option<String>,
    keywords: Vec<String>,
    exclude_keywords: Vec<String>,
) -> ExtractedAuthors {
    extract_affiliated_authors(
        authors_with_affiliations.as_deref(),
        author_full_names.as_deref(),
        &keywords,
        &exclude_keywords,
    )
}
