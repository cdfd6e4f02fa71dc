//! Site data resolution: fetch, normalize, validate, and the
//! development/production fallback policy, with a per-`site_id` cache.
//!
//! Every substitution of sample data carries a [`FallbackReason`], so a page
//! rendered without a `site_id` can be told apart from one whose document
//! failed validation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use plumbsite_core::{sample_business_data, AppConfig, BusinessData, Environment, SiteContext};

use crate::client::{DocumentClient, FetchOutcome};
use crate::error::{FetchError, SiteDataError};
use crate::normalize::{normalize, Normalized};
use crate::validate::validate;

/// Why sample data stood in for a site's own document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No `site_id` in the request (development only).
    NoSiteId,
    /// The document store answered 404.
    NotFound,
    /// The document has no `basic_info` object.
    MissingBasicInfo,
    /// The fetch failed (development only).
    FetchFailed,
    /// The document failed validation (development only).
    InvalidDocument,
}

impl FallbackReason {
    /// Fallbacks caused by a transient failure are not cached.
    fn is_cacheable(self) -> bool {
        !matches!(self, FallbackReason::FetchFailed)
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NoSiteId => write!(f, "no_site_id"),
            FallbackReason::NotFound => write!(f, "not_found"),
            FallbackReason::MissingBasicInfo => write!(f, "missing_basic_info"),
            FallbackReason::FetchFailed => write!(f, "fetch_failed"),
            FallbackReason::InvalidDocument => write!(f, "invalid_document"),
        }
    }
}

/// What [`SiteDataResolver::resolve`] hands to the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Sample(FallbackReason),
    Document(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Sample(FallbackReason),
}

/// Validated business data plus where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedSite {
    pub data: Arc<BusinessData>,
    pub source: DataSource,
}

impl ResolvedSite {
    fn remote(data: BusinessData) -> Self {
        Self {
            data: Arc::new(data),
            source: DataSource::Remote,
        }
    }

    fn sample(reason: FallbackReason) -> Self {
        Self {
            data: Arc::new(sample_business_data()),
            source: DataSource::Sample(reason),
        }
    }

    fn is_cacheable(&self) -> bool {
        match self.source {
            DataSource::Remote => true,
            DataSource::Sample(reason) => reason.is_cacheable(),
        }
    }
}

/// Resolves business data for a request, caching results per `site_id`.
pub struct SiteDataResolver {
    client: DocumentClient,
    env: Environment,
    cache: Cache<String, ResolvedSite>,
}

impl SiteDataResolver {
    #[must_use]
    pub fn new(client: DocumentClient, env: Environment, ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { client, env, cache }
    }

    /// Builds the document client and resolver from application config.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the HTTP client cannot be built or the
    /// configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let client = DocumentClient::new(
            &config.data_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(
            client,
            config.env,
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_max_entries,
        ))
    }

    #[must_use]
    pub fn env(&self) -> Environment {
        self.env
    }

    /// Produces the raw payload for `site_id` with a single fetch attempt.
    ///
    /// # Errors
    ///
    /// - [`SiteDataError::MissingSiteId`] when `site_id` is absent outside
    ///   development.
    /// - [`SiteDataError::FetchFailed`] on a failed fetch outside
    ///   development.
    pub async fn resolve(&self, site_id: Option<&str>) -> Result<RawPayload, SiteDataError> {
        let Some(site_id) = site_id else {
            if self.env.is_development() {
                tracing::info!("no site_id provided; using sample business data");
                return Ok(RawPayload::Sample(FallbackReason::NoSiteId));
            }
            return Err(SiteDataError::MissingSiteId);
        };

        match self.client.fetch_document(site_id).await {
            Ok(FetchOutcome::Found(document)) => Ok(RawPayload::Document(document)),
            Ok(FetchOutcome::NotFound) => {
                tracing::warn!(site_id, "business document not found; using sample business data");
                Ok(RawPayload::Sample(FallbackReason::NotFound))
            }
            Err(e) if self.env.is_development() => {
                tracing::warn!(site_id, error = %e, "fetch failed; using sample business data");
                Ok(RawPayload::Sample(FallbackReason::FetchFailed))
            }
            Err(e) => {
                tracing::error!(site_id, error = %e, "failed to fetch business document");
                Err(SiteDataError::FetchFailed(e))
            }
        }
    }

    /// Runs the full pipeline for the request's site, serving repeated
    /// requests for the same `site_id` from the cache until the TTL expires.
    ///
    /// # Errors
    ///
    /// Returns [`SiteDataError`] only outside development; development
    /// always resolves to some business data.
    pub async fn load(&self, site: &SiteContext) -> Result<ResolvedSite, SiteDataError> {
        let Some(site_id) = site.site_id() else {
            return self.load_uncached(None).await;
        };

        if let Some(hit) = self.cache.get(site_id).await {
            tracing::debug!(site_id, "business data served from cache");
            return Ok(hit);
        }

        let resolved = self.load_uncached(Some(site_id)).await?;
        if resolved.is_cacheable() {
            self.cache.insert(site_id.to_owned(), resolved.clone()).await;
        }
        Ok(resolved)
    }

    async fn load_uncached(&self, site_id: Option<&str>) -> Result<ResolvedSite, SiteDataError> {
        let document = match self.resolve(site_id).await? {
            RawPayload::Sample(reason) => return Ok(ResolvedSite::sample(reason)),
            RawPayload::Document(document) => document,
        };

        let normalized = match normalize(document) {
            Normalized::Payload(payload) => payload,
            Normalized::MissingBasicInfo => {
                tracing::warn!(site_id, "document has no basic_info; using sample business data");
                return Ok(ResolvedSite::sample(FallbackReason::MissingBasicInfo));
            }
        };

        match validate(normalized) {
            Ok(data) => Ok(ResolvedSite::remote(data)),
            Err(e) if self.env.is_development() => {
                tracing::error!(site_id, error = %e, "business data validation failed; using sample business data");
                Ok(ResolvedSite::sample(FallbackReason::InvalidDocument))
            }
            Err(e) => {
                tracing::error!(site_id, error = %e, "business data validation failed");
                Err(SiteDataError::Validation(e))
            }
        }
    }
}
