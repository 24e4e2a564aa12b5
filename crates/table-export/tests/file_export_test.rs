//! File-system behavior of `TableExporter::write_to_path`.

use catalog::MovieRecord;
use pipeline::ExportPipeline;
use std::fs;
use table_export::{ExportError, TableExporter, export_file_name};
use tempfile::TempDir;

fn sample_document() -> pipeline::ExportDocument {
    ExportPipeline::new()
        .run(vec![
            MovieRecord::new("A Title", 5),
            MovieRecord::new("Beta", 9),
            MovieRecord::new("The Gamma", 9),
        ])
        .unwrap()
}

#[test]
fn test_write_to_path_matches_render() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(export_file_name(2001));
    let exporter = TableExporter::new();
    let document = sample_document();

    exporter.write_to_path(&document, &path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), exporter.render(&document).unwrap());
}

#[test]
fn test_write_to_path_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.csv");
    fs::write(&path, "stale contents that are much longer than the new table\n".repeat(20)).unwrap();

    let empty = ExportPipeline::new().run(Vec::new()).unwrap();
    TableExporter::new().write_to_path(&empty, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Title,Votes\n---,\n---,\n");
}

#[test]
fn test_write_to_path_leaves_no_staging_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.csv");

    TableExporter::new().write_to_path(&sample_document(), &path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("movies.csv");

    let err = TableExporter::new()
        .write_to_path(&sample_document(), &path)
        .unwrap_err();

    assert!(matches!(err, ExportError::Io(_)));
    assert!(!path.exists());
}
