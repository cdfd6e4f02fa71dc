use thiserror::Error;

/// Failures while retrieving a site document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any non-2xx status other than 404.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid document base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// A normalized document that does not match the business data schema.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid business data format: {0}")]
    Schema(String),

    #[error("basic_info.name must not be empty")]
    EmptyName,
}

/// Errors surfaced by the pipeline once the environment's fallback policy
/// has been applied.
#[derive(Debug, Error)]
pub enum SiteDataError {
    #[error("Please provide a site_id parameter in the URL")]
    MissingSiteId,

    #[error("Failed to load business data: {0}")]
    FetchFailed(#[from] FetchError),

    #[error("Invalid business data format received: {0}")]
    Validation(#[from] ValidationError),
}
