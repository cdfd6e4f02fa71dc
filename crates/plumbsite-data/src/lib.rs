//! Business-data pipeline: fetch a site's JSON document, normalize its
//! loosely-typed fields, validate it into [`plumbsite_core::BusinessData`],
//! and apply the environment's fallback policy.

pub mod client;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod validate;

pub use client::{DocumentClient, FetchOutcome};
pub use error::{FetchError, SiteDataError, ValidationError};
pub use normalize::{normalize, Normalized};
pub use resolver::{DataSource, FallbackReason, RawPayload, ResolvedSite, SiteDataResolver};
pub use validate::validate;
