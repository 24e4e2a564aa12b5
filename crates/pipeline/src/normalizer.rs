//! Leading-article stripping for title comparison.
//!
//! The stripped form is only ever used as a sort key; the record's title is
//! never modified.

/// Articles recognised at the very start of a title, each with its trailing space.
pub const ARTICLES: [&str; 3] = ["The ", "An ", "A "];

/// Strip at most one leading article from `title`.
///
/// Matching is ASCII case-insensitive and anchored at position 0. The
/// remainder is returned as-is (same casing, no trimming), so
/// `"A A Story"` becomes `"A Story"` and `"Theater"` is left alone.
pub fn normalize(title: &str) -> &str {
    for article in ARTICLES {
        // `get` returns None when the cut would split a multi-byte char
        if let Some(prefix) = title.get(..article.len()) {
            if prefix.eq_ignore_ascii_case(article) {
                return &title[article.len()..];
            }
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_known_articles() {
        assert_eq!(normalize("The Gamma"), "Gamma");
        assert_eq!(normalize("A Title"), "Title");
        assert_eq!(normalize("An Education"), "Education");
    }

    #[test]
    fn test_case_insensitive_match_keeps_remainder_casing() {
        assert_eq!(normalize("the matrix"), "matrix");
        assert_eq!(normalize("THE END"), "END");
        assert_eq!(normalize("a quiet Place"), "quiet Place");
    }

    #[test]
    fn test_strips_only_once() {
        assert_eq!(normalize("A A Story"), "A Story");
        assert_eq!(normalize("The The"), "The");
    }

    #[test]
    fn test_leaves_other_titles_alone() {
        assert_eq!(normalize("Theater Camp"), "Theater Camp");
        assert_eq!(normalize("Anora"), "Anora");
        assert_eq!(normalize("Beta"), "Beta");
        assert_eq!(normalize("Into The Wild"), "Into The Wild");
        assert_eq!(normalize(" The Gap"), " The Gap");
    }

    #[test]
    fn test_total_on_degenerate_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "   ");
        assert_eq!(normalize("The"), "The");
        assert_eq!(normalize("The "), "");
        assert_eq!(normalize("Ä"), "Ä");
        assert_eq!(normalize("Thé Film"), "Thé Film");
    }
}
