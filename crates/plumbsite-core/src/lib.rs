//! Shared domain types for the plumbing business site: the business data
//! model, the built-in sample business, request-scoped site context, and
//! application configuration.

pub mod app_config;
pub mod business;
pub mod config;
pub mod sample;
pub mod site;

pub use app_config::{AppConfig, Environment};
pub use business::{BasicInfo, BusinessData, Review, WorkingHours};
pub use config::{load_app_config, load_app_config_from_env};
pub use sample::sample_business_data;
pub use site::SiteContext;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
