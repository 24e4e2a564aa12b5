use crate::config::TmdbConfig;
use crate::error::{Result, TmdbClientError};
use catalog::{MovieRecord, ReleaseYear, parse_discover_page};
use tracing::{debug, error, info, instrument};

/// Client for TMDB's discover endpoint.
///
/// Wraps a pooled `reqwest::Client`; cheap to clone and safe to share
/// between concurrent requests.
#[derive(Debug, Clone)]
pub struct DiscoverClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl DiscoverClient {
    /// Build a client with the configured timeout.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        info!("TMDB client ready (base url: {})", config.base_url);
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// The discover request for `year`, ready to execute.
    pub fn discover_request(&self, year: ReleaseYear) -> Result<reqwest::Request> {
        let year = year.to_string();
        let request = self
            .http
            .get(self.config.discover_url())
            .query(&[
                ("primary_release_year", year.as_str()),
                ("sort_by", self.config.sort_by.as_str()),
                ("api_key", self.config.api_key.as_str()),
            ])
            .build()?;
        Ok(request)
    }

    /// Fetch the first page of movies released in `year`.
    ///
    /// # Errors
    /// * `Request` - transport failure or timeout
    /// * `Status` - TMDB answered with a non-2xx status
    /// * `Decode` - body is not a discover page, or a movie lacks title/vote_count
    #[instrument(skip(self))]
    pub async fn discover_by_year(&self, year: ReleaseYear) -> Result<Vec<MovieRecord>> {
        let request = self.discover_request(year)?;
        debug!("Requesting {}", self.config.discover_url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("TMDB responded with {}", status);
            return Err(TmdbClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let records = parse_discover_page(&body)?;
        info!("Fetched {} movies for {}", records.len(), year);
        Ok(records)
    }
}
