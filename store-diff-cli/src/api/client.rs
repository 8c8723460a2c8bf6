//! Source client
//!
//! Fetches a single store document per call. One attempt, no retries; failures are
//! logged here and returned as [`FetchError`] so the caller decides what to do.

use anyhow::{Context, Result};
use log::{debug, error};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

use super::address::{Target, build_address, resolve_target};
use super::error::{FetchError, FetchErrorKind};
use super::models::{RawDocument, SourceLabel};
use crate::config::Config;

/// Client settings, taken from [`Config`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix for every location. Empty means locations are used as-is.
    pub base_location: String,
    pub query: BTreeMap<String, String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_location: config.base_location.clone(),
            query: config.query.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Fetches store documents over HTTP or from disk
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: Client,
    config: ClientConfig,
}

impl SourceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, config })
    }

    /// Where `location` points to with this client's base and query.
    ///
    /// The query only applies to HTTP targets; file paths are used verbatim.
    pub fn target_for(&self, location: &str) -> Target {
        let bare = build_address(&self.config.base_location, location, &BTreeMap::new());
        match resolve_target(&bare) {
            Target::Http(_) => Target::Http(build_address(
                &self.config.base_location,
                location,
                &self.config.query,
            )),
            Target::File(path) => {
                if !self.config.query.is_empty() {
                    debug!("Ignoring query parameters for file source {}", path.display());
                }
                Target::File(path)
            }
        }
    }

    /// Fetch and decode the document at `location` for `source`
    pub async fn fetch(
        &self,
        source: SourceLabel,
        location: &str,
    ) -> std::result::Result<RawDocument, FetchError> {
        let target = self.target_for(location);
        let address = match &target {
            Target::Http(url) => url.clone(),
            Target::File(path) => path.display().to_string(),
        };
        debug!("Fetching {} source from {}", source, address);

        let result = match &target {
            Target::Http(url) => self.fetch_http(url).await,
            Target::File(path) => tokio::fs::read(path).await.map_err(FetchErrorKind::Io),
        };

        let document = result.and_then(|body| {
            serde_json::from_slice::<RawDocument>(&body).map_err(FetchErrorKind::Decode)
        });

        match document {
            Ok(document) => {
                debug!(
                    "Fetched {} source: {} entries, {} of them stores",
                    source,
                    document.data.len(),
                    document.data.iter().filter(|e| e.is_store()).count()
                );
                Ok(document)
            }
            Err(kind) => {
                let err = FetchError::new(source, address, kind);
                error!("Failed to fetch {} source: {}", source, err);
                Err(err)
            }
        }
    }

    async fn fetch_http(&self, url: &str) -> std::result::Result<Vec<u8>, FetchErrorKind> {
        let response = self.http.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchErrorKind::Status(status));
        }

        let body = response.bytes().await.map_err(request_error)?;
        Ok(body.to_vec())
    }
}

fn request_error(err: reqwest::Error) -> FetchErrorKind {
    if err.is_timeout() {
        FetchErrorKind::Timeout
    } else {
        FetchErrorKind::Request(err)
    }
}
