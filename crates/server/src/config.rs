//! Server settings, read from flags with environment fallbacks.

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use pipeline::DEFAULT_TOP_N;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tmdb_client::{DEFAULT_BASE_URL, DEFAULT_SORT_BY, TmdbConfig};

#[derive(Parser, Clone)]
#[command(name = "movie-export-server", version, about = "Serves per-year movie CSV exports")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// TMDB v3 API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub tmdb_base_url: String,

    /// Provider-side ordering of the fetched page
    #[arg(long, env = "TMDB_SORT_BY", default_value = DEFAULT_SORT_BY)]
    pub tmdb_sort_by: String,

    /// Directory where generated files are kept and served under /exports
    #[arg(long, env = "EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Movies kept per view
    #[arg(
        long,
        env = "EXPORT_LIMIT",
        default_value_t = DEFAULT_TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn tmdb_config(&self) -> TmdbConfig {
        TmdbConfig::new(self.tmdb_api_key.clone())
            .with_base_url(self.tmdb_base_url.clone())
            .with_sort_by(self.tmdb_sort_by.clone())
    }
}

// Keeps the key out of logs
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("tmdb_api_key", &"<redacted>")
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("tmdb_sort_by", &self.tmdb_sort_by)
            .field("export_dir", &self.export_dir)
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "movie-export-server",
            "--tmdb-api-key",
            "k",
            "--bind",
            "0.0.0.0",
            "--port",
            "8080",
            "--limit",
            "5",
            "--export-dir",
            "/tmp/exports",
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.limit, 5);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(config.tmdb_config().api_key, "k");
    }

    #[test]
    fn test_zero_limit_rejected_at_startup() {
        let result = ServerConfig::try_parse_from([
            "movie-export-server",
            "--tmdb-api-key",
            "k",
            "--limit",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config =
            ServerConfig::try_parse_from(["movie-export-server", "--tmdb-api-key", "s3cret"])
                .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"), "{rendered}");
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("limit"));
    }
}
