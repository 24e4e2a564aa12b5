//! Error types for the table-export crate.

use thiserror::Error;

/// Errors that can occur while writing an export table
#[derive(Error, Debug)]
pub enum ExportError {
    /// Destination could not be opened, written, or moved into place
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder rejected a record
    #[error("CSV encoding error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ExportError::Io(io),
            other => ExportError::Csv(format!("{other:?}")),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ExportError = csv::Error::from(io).into();
        assert!(matches!(err, ExportError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }
}
