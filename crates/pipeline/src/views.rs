//! The three fixed orderings of a ranked movie set.
//!
//! Views are an enumerated strategy list: each `ViewKind` owns a pure
//! comparator, and `ViewKind::ALL` fixes their order in the output.

use crate::collation::compare_titles;
use crate::document::{ExportDocument, ExportRow, ViewSection};
use crate::normalizer::normalize;
use catalog::MovieRecord;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Ranked order, unchanged
    AsRanked,
    /// Ascending by title
    ByTitle,
    /// Ascending by title with one leading article ignored
    ByTitleIgnoringArticles,
}

impl ViewKind {
    /// Output order of the views
    pub const ALL: [ViewKind; 3] = [
        ViewKind::AsRanked,
        ViewKind::ByTitle,
        ViewKind::ByTitleIgnoringArticles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::AsRanked => "as_ranked",
            ViewKind::ByTitle => "by_title",
            ViewKind::ByTitleIgnoringArticles => "by_title_ignoring_articles",
        }
    }

    /// Position of this view within `ALL`.
    pub fn index(self) -> usize {
        match self {
            ViewKind::AsRanked => 0,
            ViewKind::ByTitle => 1,
            ViewKind::ByTitleIgnoringArticles => 2,
        }
    }

    /// Comparator for this view. Used with a stable sort, so `Equal` keeps
    /// the ranked order.
    pub fn compare(self, a: &MovieRecord, b: &MovieRecord) -> Ordering {
        match self {
            ViewKind::AsRanked => Ordering::Equal,
            ViewKind::ByTitle => compare_titles(&a.title, &b.title),
            ViewKind::ByTitleIgnoringArticles => {
                compare_titles(normalize(&a.title), normalize(&b.title))
                    .then_with(|| compare_titles(&a.title, &b.title))
            }
        }
    }

    /// Order `ranked` according to this view without touching the input.
    pub fn order<'a>(self, ranked: &'a [MovieRecord]) -> Vec<&'a MovieRecord> {
        let mut ordered: Vec<&MovieRecord> = ranked.iter().collect();
        if self != ViewKind::AsRanked {
            ordered.sort_by(|a, b| self.compare(a, b));
        }
        ordered
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the export document: one section per `ViewKind`, in `ALL` order.
pub fn build_views(ranked: &[MovieRecord]) -> ExportDocument {
    let sections = ViewKind::ALL
        .into_iter()
        .map(|kind| {
            let rows = kind
                .order(ranked)
                .into_iter()
                .map(ExportRow::from_record)
                .collect();
            ViewSection::new(kind, rows)
        })
        .collect();

    ExportDocument::new(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(doc: &ExportDocument, kind: ViewKind) -> Vec<&str> {
        doc.section(kind).titles().collect()
    }

    #[test]
    fn test_reference_scenario() {
        let ranked = vec![
            MovieRecord::new("Beta", 9),
            MovieRecord::new("The Gamma", 9),
            MovieRecord::new("A Title", 5),
        ];

        let doc = build_views(&ranked);

        assert_eq!(titles(&doc, ViewKind::AsRanked), ["Beta", "The Gamma", "A Title"]);
        assert_eq!(titles(&doc, ViewKind::ByTitle), ["A Title", "Beta", "The Gamma"]);
        assert_eq!(
            titles(&doc, ViewKind::ByTitleIgnoringArticles),
            ["Beta", "The Gamma", "A Title"]
        );
    }

    #[test]
    fn test_normalized_ties_fall_back_to_full_title() {
        let ranked = vec![
            MovieRecord::new("The Thing", 4),
            MovieRecord::new("Thing", 3),
            MovieRecord::new("A Thing", 2),
        ];

        let doc = build_views(&ranked);
        assert_eq!(
            titles(&doc, ViewKind::ByTitleIgnoringArticles),
            ["A Thing", "The Thing", "Thing"]
        );
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let ranked = vec![
            MovieRecord::new("Zorro", 50),
            MovieRecord::new("Éclair", 40),
            MovieRecord::new("Amores Perros", 30),
            MovieRecord::new("Amélie", 20),
            MovieRecord::new("L'Été meurtrier", 10),
        ];

        let doc = build_views(&ranked);
        assert_eq!(
            titles(&doc, ViewKind::ByTitle),
            ["Amélie", "Amores Perros", "Éclair", "L'Été meurtrier", "Zorro"]
        );
        assert_eq!(
            titles(&doc, ViewKind::ByTitleIgnoringArticles),
            ["Amélie", "Amores Perros", "Éclair", "L'Été meurtrier", "Zorro"]
        );
    }

    #[test]
    fn test_identical_titles_keep_ranked_order() {
        let ranked = vec![
            MovieRecord::new("Dune", 90).with_id(1),
            MovieRecord::new("Dune", 40).with_id(2),
        ];

        let doc = build_views(&ranked);
        for kind in ViewKind::ALL {
            let votes: Vec<_> = doc
                .section(kind)
                .rows()
                .iter()
                .filter_map(ExportRow::vote_count)
                .collect();
            assert_eq!(votes, [90, 40], "view {kind}");
        }
    }

    #[test]
    fn test_input_is_not_reordered() {
        let ranked = vec![MovieRecord::new("Zulu", 2), MovieRecord::new("Alpha", 1)];
        let _ = build_views(&ranked);
        assert_eq!(ranked[0].title, "Zulu");
    }

    #[test]
    fn test_view_metadata() {
        let indices: Vec<usize> = ViewKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(ViewKind::ByTitle.to_string(), "by_title");
    }
}
