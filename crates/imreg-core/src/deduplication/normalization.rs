//! Title normalization for duplicate comparison

/// Normalize a title for comparison.
///
/// Lowercases, collapses whitespace runs to single spaces, and trims.
/// The normalized form is only ever a comparison key, never shown to the
/// user, so nothing beyond case and spacing is touched.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an optional title; an absent title compares as empty.
pub(crate) fn normalize_optional_title(title: Option<&str>) -> String {
    title.map(normalize_title).unwrap_or_default()
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn normalize_title_export(title: String) -> String {
    normalize_title(&title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("  Deep   Learning\tin Healthcare "),
            "deep learning in healthcare"
        );
        assert_eq!(normalize_title("Machine Learning"), "machine learning");
    }

    #[test]
    fn test_normalize_title_is_idempotent() {
        let once = normalize_title("  A   Title\nWith  Breaks ");
        assert_eq!(normalize_title(&once), once);
    }

    #[test]
    fn test_absent_title_normalizes_empty() {
        assert_eq!(normalize_optional_title(None), "");
        assert_eq!(normalize_optional_title(Some("   ")), "");
    }

    #[test]
    fn test_punctuation_is_preserved() {
        // Only case and spacing are canonicalized; the registry staff's
        // punctuation is part of the comparison key.
        assert_eq!(
            normalize_title("Correction to: Deep Learning"),
            "correction to: deep learning"
        );
    }
}
