use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/atlasgrowth/Arkansasplumbers/main/data/processed/businesses";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PLUMBSITE_ENV", "development"))?;

    let bind_addr = or_default("PLUMBSITE_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PLUMBSITE_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PLUMBSITE_LOG_LEVEL", "info");

    let data_base_url = or_default("PLUMBSITE_DATA_BASE_URL", DEFAULT_DATA_BASE_URL);
    if !(data_base_url.starts_with("http://") || data_base_url.starts_with("https://")) {
        return Err(invalid(
            "PLUMBSITE_DATA_BASE_URL",
            format!("expected an http(s) URL, got '{data_base_url}'"),
        ));
    }

    let request_timeout_secs = parse_u64("PLUMBSITE_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "PLUMBSITE_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let user_agent = or_default("PLUMBSITE_USER_AGENT", "plumbsite/0.1 (business-site)");
    let cache_ttl_secs = parse_u64("PLUMBSITE_CACHE_TTL_SECS", "300")?;
    let cache_max_entries = parse_u64("PLUMBSITE_CACHE_MAX_ENTRIES", "1000")?;

    let base_path = normalize_base_path(&or_default("PLUMBSITE_BASE_PATH", ""));
    let maps_api_key = lookup("PLUMBSITE_MAPS_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        data_base_url,
        request_timeout_secs,
        user_agent,
        cache_ttl_secs,
        cache_max_entries,
        base_path,
        maps_api_key,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLUMBSITE_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// `"plumbing/"` and `"/plumbing"` both become `"/plumbing"`; blank stays blank.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
