use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the subsidy lookup service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// The single upstream page that publishes the regional subsidy table.
    pub source_url: String,
    /// Identifier reported as `source` on fresh (non-cached) responses.
    pub source_id: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Lifetime of one cache generation. See the server's `ResultCache`.
    pub cache_ttl_secs: u64,
}
