//! Lookup from the full-name/identifier field
//!
//! The "Author full names" field carries entries like
//! `Smirnova, Anna (57219841234)`. Entries that do not match that shape
//! contribute nothing to the lookup.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One "LastName, FirstName (numeric-id)" entry.
    static ref FULL_NAME_WITH_ID: Regex =
        Regex::new(r"^(?P<name>.+?)\s*\((?P<id>\d+)\)$").expect("static pattern");
}

/// One parsed full-name entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FullNameEntry {
    /// "LastName, FirstName" as written in the field
    pub full_name: String,
    pub author_id: String,
    first_name: Option<String>,
}

impl FullNameEntry {
    fn first_initial(&self) -> Option<char> {
        self.first_name.as_ref().and_then(|name| name.chars().next())
    }
}

/// Multimap from last name to the full-name entries sharing it.
///
/// Several co-authors may share a last name; all of their entries are
/// kept and told apart by first initial at lookup time.
#[derive(Debug, Default)]
pub(crate) struct FullNameIndex {
    by_last_name: HashMap<String, Vec<FullNameEntry>>,
}

impl FullNameIndex {
    /// Parse the semicolon-delimited full-name field into a lookup.
    pub fn parse(author_full_names: Option<&str>) -> Self {
        let mut index = Self::default();
        let Some(raw) = author_full_names else {
            return index;
        };

        for part in raw.split(';') {
            let part = part.trim();
            let Some(captures) = FULL_NAME_WITH_ID.captures(part) else {
                // malformed entry: skipped
                continue;
            };
            let full_name = captures["name"].trim().to_string();
            let author_id = captures["id"].to_string();

            let mut name_parts = full_name.splitn(2, ',');
            let last_name = name_parts.next().unwrap_or_default().trim().to_string();
            let first_name = name_parts
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            index.by_last_name.entry(last_name).or_default().push(FullNameEntry {
                full_name,
                author_id,
                first_name,
            });
        }

        index
    }

    /// Find the entry for an author block.
    ///
    /// A last name held by a single entry resolves directly. When several
    /// entries share the last name, the one whose first name starts with
    /// the block's first initial wins, provided exactly one does; anything
    /// else is treated as unresolved rather than guessed.
    pub fn lookup(&self, last_name: &str, first_initial: Option<char>) -> Option<&FullNameEntry> {
        let entries = self.by_last_name.get(last_name)?;
        if let [single] = entries.as_slice() {
            return Some(single);
        }

        let initial = first_initial?;
        let mut matching = entries
            .iter()
            .filter(|entry| entry.first_initial().is_some_and(|c| chars_eq_ignore_case(c, initial)));
        match (matching.next(), matching.next()) {
            (Some(entry), None) => Some(entry),
            _ => None,
        }
    }
}

/// Case-insensitive char comparison that survives non-ASCII initials.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}
