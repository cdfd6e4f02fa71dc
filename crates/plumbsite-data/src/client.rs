//! HTTP client for per-site business documents.
//!
//! Each business lives at `<base>/<site_id>.json`. A 404 is reported as
//! [`FetchOutcome::NotFound`] rather than an error because a missing
//! document only means the business has no data yet.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::FetchError;

/// Upper bound on connection setup; never longer than the whole request.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

fn connect_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS))
}

/// Result of a document fetch that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(serde_json::Value),
    NotFound,
}

/// Client for the business document store.
///
/// Use [`DocumentClient::new`] with the configured base URL; tests point it
/// at a wiremock server.
pub struct DocumentClient {
    client: Client,
    base_url: Url,
}

impl DocumentClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(connect_timeout(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        let invalid = |reason: String| FetchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Builds `<base>/<site_id>.json`, encoding `site_id` as a single path
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if the base URL cannot carry
    /// path segments.
    pub fn document_url(&self, site_id: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(&format!("{site_id}.json"));
        Ok(url)
    }

    /// Fetches the document for `site_id` with a single attempt.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure or timeout.
    /// - [`FetchError::UnexpectedStatus`] for non-2xx statuses other than 404.
    /// - [`FetchError::Deserialize`] if the body is not JSON.
    pub async fn fetch_document(&self, site_id: &str) -> Result<FetchOutcome, FetchError> {
        let url = self.document_url(site_id)?;
        tracing::debug!(%url, site_id, "fetching business document");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(FetchOutcome::Found)
            .map_err(|e| FetchError::Deserialize {
                context: url.to_string(),
                source: e,
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
