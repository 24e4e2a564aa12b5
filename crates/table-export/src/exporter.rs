//! Row-oriented rendering of an `ExportDocument`.
//!
//! Output layout:
//! ```text
//! Title,Votes
//! <view 1 rows>
//! ---,
//! <view 2 rows>
//! ---,
//! <view 3 rows>
//! ```
//! Rows are written strictly in document order; nothing is re-sorted or
//! deduplicated here.

use crate::error::Result;
use catalog::ReleaseYear;
use csv::{Terminator, WriterBuilder};
use pipeline::{ExportDocument, ExportRow, SEPARATOR_TITLE};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Fixed column names
pub const HEADER: [&str; 2] = ["Title", "Votes"];

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const TSV_CONTENT_TYPE: &str = "text/tab-separated-values";

/// Download name for a year's export, e.g. `movies_1999.csv`
pub fn export_file_name(year: ReleaseYear) -> String {
    format!("movies_{year}.csv")
}

/// Serializes export documents as delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableExporter {
    delimiter: u8,
}

impl TableExporter {
    /// Comma-delimited exporter.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab-delimited exporter.
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Use a different field delimiter (builder pattern).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn content_type(&self) -> &'static str {
        if self.delimiter == b'\t' {
            TSV_CONTENT_TYPE
        } else {
            CSV_CONTENT_TYPE
        }
    }

    /// Render the whole document into memory.
    ///
    /// Rendering is deterministic: the same document always yields the same bytes.
    pub fn render(&self, document: &ExportDocument) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(64 * (document.row_count() + 1));
        self.write_to(document, &mut buffer)?;
        Ok(buffer)
    }

    /// Stream the document into `writer`, header first.
    ///
    /// # Errors
    /// `ExportError::Io` if any write or the final flush fails. Bytes already
    /// written are not rolled back.
    pub fn write_to<W: Write>(&self, document: &ExportDocument, writer: W) -> Result<()> {
        let mut table = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(writer);

        table.write_record(HEADER)?;
        for row in document.rows() {
            match row {
                ExportRow::Movie { title, vote_count } => {
                    let votes = vote_count.to_string();
                    table.write_record([title.as_str(), votes.as_str()])?;
                }
                ExportRow::Separator => table.write_record([SEPARATOR_TITLE, ""])?,
            }
        }
        table.flush()?;

        debug!("Wrote {} table rows", document.row_count() + 1);
        Ok(())
    }

    /// Write the document to `path`.
    ///
    /// Bytes go to a temporary file in the same directory which is then
    /// renamed over `path`, so readers never observe a half-written table.
    pub fn write_to_path(&self, document: &ExportDocument, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staging = NamedTempFile::new_in(dir)?;
        self.write_to(document, staging.as_file_mut())?;
        staging.as_file().sync_all()?;
        staging.persist(path).map_err(|err| err.error)?;

        info!("Exported {} rows to {}", document.row_count(), path.display());
        Ok(())
    }
}

impl Default for TableExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use catalog::MovieRecord;
    use pipeline::ExportPipeline;

    fn render_str(exporter: TableExporter, records: Vec<MovieRecord>) -> String {
        let document = ExportPipeline::new().run(records).unwrap();
        String::from_utf8(exporter.render(&document).unwrap()).unwrap()
    }

    /// Writer that refuses every byte
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "peer went away"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reference_scenario_bytes() {
        let output = render_str(
            TableExporter::new(),
            vec![
                MovieRecord::new("A Title", 5),
                MovieRecord::new("Beta", 9),
                MovieRecord::new("The Gamma", 9),
            ],
        );

        assert_eq!(
            output,
            "Title,Votes\n\
             Beta,9\nThe Gamma,9\nA Title,5\n\
             ---,\n\
             A Title,5\nBeta,9\nThe Gamma,9\n\
             ---,\n\
             Beta,9\nThe Gamma,9\nA Title,5\n"
        );
    }

    #[test]
    fn test_empty_document() {
        let output = render_str(TableExporter::new(), Vec::new());
        assert_eq!(output, "Title,Votes\n---,\n---,\n");
    }

    #[test]
    fn test_quotes_embedded_delimiters_and_quotes() {
        let output = render_str(
            TableExporter::new(),
            vec![
                MovieRecord::new("Crouching Tiger, Hidden Dragon", 2),
                MovieRecord::new("Say \"Anything\"", 1),
            ],
        );

        let first_view: Vec<&str> = output.lines().skip(1).take(2).collect();
        assert_eq!(
            first_view,
            ["\"Crouching Tiger, Hidden Dragon\",2", "\"Say \"\"Anything\"\"\",1"]
        );
    }

    #[test]
    fn test_movie_named_like_separator_keeps_its_votes() {
        let output = render_str(TableExporter::new(), vec![MovieRecord::new("---", 4)]);
        assert_eq!(output, "Title,Votes\n---,4\n---,\n---,4\n---,\n---,4\n");
    }

    #[test]
    fn test_tsv_delimiter() {
        let exporter = TableExporter::tsv();
        let output = render_str(exporter, vec![MovieRecord::new("Heat, Part 1", 3)]);

        assert!(output.starts_with("Title\tVotes\nHeat, Part 1\t3\n---\t\n"));
        assert_eq!(exporter.content_type(), TSV_CONTENT_TYPE);
        assert_eq!(TableExporter::new().content_type(), CSV_CONTENT_TYPE);
    }

    #[test]
    fn test_render_is_idempotent() {
        let document = ExportPipeline::new()
            .run(vec![MovieRecord::new("Zodiac", 3), MovieRecord::new("an Alien", 3)])
            .unwrap();
        let exporter = TableExporter::new();

        assert_eq!(exporter.render(&document).unwrap(), exporter.render(&document).unwrap());
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        let document = ExportPipeline::new().run(vec![MovieRecord::new("Heat", 1)]).unwrap();
        let err = TableExporter::new().write_to(&document, BrokenPipe).unwrap_err();

        assert!(matches!(err, ExportError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name(1999), "movies_1999.csv");
    }
}
