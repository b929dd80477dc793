use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SOURCE_URL: &str =
    "https://ev.or.kr/nportal/buySupprt/initPsLocalCarPirceAction.do";
pub const DEFAULT_SOURCE_ID: &str = "ev_or_kr";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("EVSUB_ENV", "development"));
    let bind_addr = parse_addr("EVSUB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("EVSUB_LOG_LEVEL", "info");

    let source_url = or_default("EVSUB_SOURCE_URL", DEFAULT_SOURCE_URL);
    if !(source_url.starts_with("https://") || source_url.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "EVSUB_SOURCE_URL".to_string(),
            reason: format!("\"{source_url}\" is not an http(s) URL"),
        });
    }
    let source_id = or_default("EVSUB_SOURCE_ID", DEFAULT_SOURCE_ID);

    let fetch_timeout_secs = parse_u64("EVSUB_FETCH_TIMEOUT_SECS", "10")?;
    if fetch_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "EVSUB_FETCH_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("EVSUB_USER_AGENT", DEFAULT_USER_AGENT);
    let cache_ttl_secs = parse_u64("EVSUB_CACHE_TTL_SECS", "86400")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        source_url,
        source_id,
        fetch_timeout_secs,
        user_agent,
        cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
