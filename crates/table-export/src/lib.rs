//! Delimited-text export of ranked movie views.
//!
//! `TableExporter` turns an `ExportDocument` into the `Title,Votes` table
//! served to clients and written to disk. Quoting follows RFC 4180: a
//! field is quoted only when it contains the delimiter, a quote, or a
//! line break.
//!
//! ## Example Usage
//! ```ignore
//! use table_export::TableExporter;
//!
//! let bytes = TableExporter::new().render(&document)?;
//! TableExporter::new().write_to_path(&document, Path::new("movies_1999.csv"))?;
//! ```

pub mod error;
pub mod exporter;

pub use error::{ExportError, Result};
pub use exporter::{
    CSV_CONTENT_TYPE, HEADER, TSV_CONTENT_TYPE, TableExporter, export_file_name,
};
