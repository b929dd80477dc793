use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(cfg.source_id, "ev_or_kr");
    assert_eq!(cfg.fetch_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.cache_ttl_secs, 86_400);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("EVSUB_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EVSUB_BIND_ADDR"),
        "expected InvalidEnvVar(EVSUB_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_source_overrides() {
    let mut map = HashMap::new();
    map.insert("EVSUB_SOURCE_URL", "http://127.0.0.1:8080/table.html");
    map.insert("EVSUB_SOURCE_ID", "mirror");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.source_url, "http://127.0.0.1:8080/table.html");
    assert_eq!(cfg.source_id, "mirror");
}

#[test]
fn build_app_config_rejects_non_http_source_url() {
    let mut map = HashMap::new();
    map.insert("EVSUB_SOURCE_URL", "ftp://ev.or.kr/table");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EVSUB_SOURCE_URL"),
        "expected InvalidEnvVar(EVSUB_SOURCE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fetch_timeout_override() {
    let mut map = HashMap::new();
    map.insert("EVSUB_FETCH_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_timeout_secs, 5);
}

#[test]
fn build_app_config_rejects_zero_fetch_timeout() {
    let mut map = HashMap::new();
    map.insert("EVSUB_FETCH_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EVSUB_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(EVSUB_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_cache_ttl_invalid() {
    let mut map = HashMap::new();
    map.insert("EVSUB_CACHE_TTL_SECS", "a day");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EVSUB_CACHE_TTL_SECS"),
        "expected InvalidEnvVar(EVSUB_CACHE_TTL_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("EVSUB_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}
