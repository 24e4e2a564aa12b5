use anyhow::{Context, Result, anyhow};
use catalog::{MovieRecord, ReleaseYear, parse_any};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{DEFAULT_TOP_N, ExportDocument, ExportPipeline};
use std::path::{Path, PathBuf};
use std::time::Instant;
use table_export::{TableExporter, export_file_name};
use tmdb_client::{DEFAULT_BASE_URL, DiscoverClient, TmdbConfig};
use tracing::info;

/// movie-finder - per-year movie tables from TMDB
#[derive(Parser)]
#[command(name = "movie-finder", version)]
#[command(about = "Export a year's most-voted movies as a three-view CSV table", long_about = None)]
struct Cli {
    /// TMDB v3 API key (only needed for `export`)
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    tmdb_api_key: Option<String>,

    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    tmdb_base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a year's movies from TMDB and write the table
    Export {
        /// Primary release year
        #[arg(long)]
        year: ReleaseYear,

        /// Output path (defaults to movies_<year>.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Build the table from a saved discover response
    Render {
        /// JSON file: a discover page or a bare array of movies
        #[arg(long)]
        input: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct FormatArgs {
    /// Number of movies kept per view
    #[arg(
        long,
        default_value_t = DEFAULT_TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    limit: usize,

    /// Tab-separated output instead of CSV
    #[arg(long)]
    tsv: bool,
}

impl FormatArgs {
    fn exporter(&self) -> TableExporter {
        if self.tsv {
            TableExporter::tsv()
        } else {
            TableExporter::new()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `render` can stream the table on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export { year, out, format } => {
            let api_key = cli
                .tmdb_api_key
                .ok_or_else(|| anyhow!("TMDB_API_KEY is not set (use --tmdb-api-key or .env)"))?;
            let config = TmdbConfig::new(api_key).with_base_url(cli.tmdb_base_url);
            handle_export(config, year, out, format).await?
        }
        Commands::Render { input, out, format } => handle_render(&input, out.as_deref(), format)?,
    }

    Ok(())
}

/// Handle the 'export' command
async fn handle_export(
    config: TmdbConfig,
    year: ReleaseYear,
    out: Option<PathBuf>,
    format: FormatArgs,
) -> Result<()> {
    let client = DiscoverClient::new(config).context("Failed to create TMDB client")?;

    println!("Fetching movies released in {}...", year);
    let start = Instant::now();
    let records = client
        .discover_by_year(year)
        .await
        .with_context(|| format!("Failed to fetch movies for {year}"))?;
    println!(
        "{} Fetched {} movies in {:?}",
        "✓".green(),
        records.len(),
        start.elapsed()
    );

    let path = out.unwrap_or_else(|| default_output_path(year, format.tsv));
    let document = build_and_write(records, format, &path)?;
    print_summary(&document);
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

/// Handle the 'render' command
fn handle_render(input: &Path, out: Option<&Path>, format: FormatArgs) -> Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let records =
        parse_any(&bytes).with_context(|| format!("Invalid movie data in {}", input.display()))?;
    info!("Loaded {} movies from {}", records.len(), input.display());

    match out {
        Some(path) => {
            let document = build_and_write(records, format, path)?;
            print_summary(&document);
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => {
            let document = ExportPipeline::new().with_limit(format.limit).run(records)?;
            format
                .exporter()
                .write_to(&document, std::io::stdout().lock())
                .context("Failed to write table to stdout")?;
        }
    }
    Ok(())
}

fn build_and_write(
    records: Vec<MovieRecord>,
    format: FormatArgs,
    path: &Path,
) -> Result<ExportDocument> {
    let document = ExportPipeline::new().with_limit(format.limit).run(records)?;
    format
        .exporter()
        .write_to_path(&document, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(document)
}

fn default_output_path(year: ReleaseYear, tsv: bool) -> PathBuf {
    let path = PathBuf::from(export_file_name(year));
    if tsv { path.with_extension("tsv") } else { path }
}

/// Print each view with its rows numbered
fn print_summary(document: &ExportDocument) {
    for section in document.sections() {
        println!("{}", format!("{} ({} movies)", section.kind(), section.len()).bold().blue());
        for (rank, row) in section.rows().iter().enumerate() {
            println!(
                "{:>3}. {} {}",
                (rank + 1).to_string().green(),
                row.title(),
                format!("[{} votes]", row.vote_count().unwrap_or_default()).dimmed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from([
            "movie-finder", "export", "--year", "1999", "--limit", "3", "--tsv",
        ])
        .unwrap();

        match cli.command {
            Commands::Export { year, out, format } => {
                assert_eq!(year, 1999);
                assert!(out.is_none());
                assert_eq!(format.limit, 3);
                assert!(format.tsv);
            }
            Commands::Render { .. } => panic!("expected export"),
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = Cli::try_parse_from([
            "movie-finder", "render", "--input", "movies.json", "--limit", "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(2008, false), PathBuf::from("movies_2008.csv"));
        assert_eq!(default_output_path(2008, true), PathBuf::from("movies_2008.tsv"));
    }
}
