mod subsidy;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use evsub_scraper::SubsidyPageClient;
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::cache::ResultCache;
use crate::middleware::{request_id, REQUEST_ID_HEADER};

/// Shared per-process state. The cache and refresh lock live as long as the
/// server does.
#[derive(Clone)]
pub struct AppState {
    pub client: SubsidyPageClient,
    pub cache: Arc<ResultCache>,
    /// Serializes cache misses so concurrent requests don't all hit upstream.
    pub refresh_lock: Arc<Mutex<()>>,
}

impl AppState {
    #[must_use]
    pub fn new(client: SubsidyPageClient, cache: ResultCache) -> Self {
        Self {
            client,
            cache: Arc::new(cache),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/subsidy", get(subsidy::get_subsidy))
        .route("/.netlify/functions/subsidy", get(subsidy::get_subsidy))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
