//! The assembled, immutable export document.
//!
//! Rows are a tagged variant, so a movie literally titled `---` is never
//! confused with a section boundary.

use crate::views::ViewKind;
use catalog::MovieRecord;

/// Title text a separator row is rendered with
pub const SEPARATOR_TITLE: &str = "---";

static SEPARATOR: ExportRow = ExportRow::Separator;

/// One line of the exported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRow {
    Movie { title: String, vote_count: u64 },
    Separator,
}

impl ExportRow {
    pub fn from_record(record: &MovieRecord) -> Self {
        ExportRow::Movie {
            title: record.title.clone(),
            vote_count: record.vote_count,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ExportRow::Separator)
    }

    /// Title field as it appears in the table.
    pub fn title(&self) -> &str {
        match self {
            ExportRow::Movie { title, .. } => title,
            ExportRow::Separator => SEPARATOR_TITLE,
        }
    }

    /// Vote field; `None` for separators.
    pub fn vote_count(&self) -> Option<u64> {
        match self {
            ExportRow::Movie { vote_count, .. } => Some(*vote_count),
            ExportRow::Separator => None,
        }
    }
}

/// A single ordered view of the ranked movies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSection {
    kind: ViewKind,
    rows: Vec<ExportRow>,
}

impl ViewSection {
    pub(crate) fn new(kind: ViewKind, rows: Vec<ExportRow>) -> Self {
        debug_assert!(rows.iter().all(|row| !row.is_separator()));
        Self { kind, rows }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(ExportRow::title)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Three views in fixed order, ready for serialization.
///
/// Only the pipeline can build one, which guarantees every section is a
/// permutation of the same ranked set and that sections follow
/// `ViewKind::ALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    sections: Vec<ViewSection>,
}

impl ExportDocument {
    pub(crate) fn new(sections: Vec<ViewSection>) -> Self {
        debug_assert_eq!(
            sections.iter().map(ViewSection::kind).collect::<Vec<_>>(),
            ViewKind::ALL
        );
        Self { sections }
    }

    pub fn sections(&self) -> &[ViewSection] {
        &self.sections
    }

    pub fn section(&self, kind: ViewKind) -> &ViewSection {
        &self.sections[kind.index()]
    }

    /// Every row in output order, with one separator between consecutive
    /// sections. Separators are emitted even when a section is empty.
    pub fn rows(&self) -> impl Iterator<Item = &ExportRow> + '_ {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(i, section)| {
                let separator: Option<&ExportRow> = (i > 0).then_some(&SEPARATOR);
                separator.into_iter().chain(section.rows.iter())
            })
    }

    /// Total number of rows including separators (header not counted).
    pub fn row_count(&self) -> usize {
        self.movie_row_count() + self.sections.len().saturating_sub(1)
    }

    pub fn movie_row_count(&self) -> usize {
        self.sections.iter().map(ViewSection::len).sum()
    }
}
