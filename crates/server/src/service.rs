//! # Export Service
//!
//! Coordinates one export request:
//! 1. Fetch the year's movies from TMDB
//! 2. Rank and build the three views
//! 3. Render the table (and persist it when an export directory is set)
//!
//! Each request owns its data end to end; the only shared state is the
//! HTTP client's connection pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use catalog::ReleaseYear;
use pipeline::ExportPipeline;
use table_export::{TableExporter, export_file_name};
use tmdb_client::DiscoverClient;

/// A rendered table, ready to send.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    /// Where the file was persisted, if anywhere
    pub saved_to: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ExportService {
    client: DiscoverClient,
    pipeline: ExportPipeline,
    exporter: TableExporter,
    export_dir: Option<Arc<PathBuf>>,
}

impl ExportService {
    pub fn new(client: DiscoverClient, pipeline: ExportPipeline) -> Self {
        Self {
            client,
            pipeline,
            exporter: TableExporter::new(),
            export_dir: None,
        }
    }

    /// Also keep each rendered file in `dir` (builder pattern).
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(Arc::new(dir.into()));
        self
    }

    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref().map(PathBuf::as_path)
    }

    /// Main entry point: produce the export for `year`.
    pub async fn generate(&self, year: ReleaseYear) -> Result<CsvExport> {
        let start_time = Instant::now();

        let records = self
            .client
            .discover_by_year(year)
            .await
            .with_context(|| format!("Failed to fetch movies for {year}"))?;
        info!("Fetched {} movies for {}", records.len(), year);

        let file_name = export_file_name(year);
        let pipeline = self.pipeline.clone();
        let exporter = self.exporter;
        let target = self.export_dir.as_ref().map(|dir| dir.join(&file_name));

        // Sorting, encoding and the file write are blocking work
        let (bytes, saved_to) = tokio::task::spawn_blocking(move || -> Result<_> {
            let document = pipeline.run(records).context("Failed to build views")?;
            let bytes = exporter.render(&document).context("Failed to render table")?;
            if let Some(path) = &target {
                exporter
                    .write_to_path(&document, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            Ok((bytes, target))
        })
        .await
        .context("Export task panicked")??;

        if saved_to.is_none() {
            warn!("No export directory configured; {} was not persisted", file_name);
        }
        info!(
            "Export for {} ready ({} bytes) in {:.2?}",
            year,
            bytes.len(),
            start_time.elapsed()
        );

        Ok(CsvExport {
            file_name,
            content_type: self.exporter.content_type(),
            bytes,
            saved_to,
        })
    }
}
