mod api;
mod cache;
mod middleware;

use evsub_scraper::SubsidyPageClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    cache::ResultCache,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = evsub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = SubsidyPageClient::new(
        &config.source_url,
        &config.source_id,
        config.fetch_timeout_secs,
        &config.user_agent,
    )?;
    let cache = ResultCache::with_ttl_secs(config.cache_ttl_secs);
    let app = build_app(AppState::new(client, cache));

    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        source_id = %config.source_id,
        source_url = %config.source_url,
        cache_ttl_secs = config.cache_ttl_secs,
        "starting subsidy lookup server"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
