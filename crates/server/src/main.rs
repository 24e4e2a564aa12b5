//! Movie export server.
//!
//! Configuration comes from flags or the environment (a `.env` file in the
//! working directory is loaded first). `TMDB_API_KEY` is required.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipeline::ExportPipeline;
use server::{AppState, ExportService, ServerConfig, build_router};
use tmdb_client::DiscoverClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::parse();
    info!(
        "Starting movie export server v{} (limit: {})",
        env!("CARGO_PKG_VERSION"),
        config.limit
    );

    let client = DiscoverClient::new(config.tmdb_config()).context("Creating TMDB client")?;
    let mut service = ExportService::new(client, ExportPipeline::new().with_limit(config.limit));
    if let Some(dir) = &config.export_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Creating export directory {}", dir.display()))?;
        info!("Persisting exports to {}", dir.display());
        service = service.with_export_dir(dir);
    }

    let app = build_router(AppState::new(service));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Binding {addr}"))?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
