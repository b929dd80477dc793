use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use evsub_scraper::{extract, normalize, ExtractionResult, NotFoundReason};
use serde::Serialize;

use crate::middleware::RequestId;

use super::AppState;

pub(super) const MISSING_PARAMS: &str = "region and trim are required";
pub(super) const EXTRACTION_FAILED_MESSAGE: &str = "자동 조회가 실패했어. ev.or.kr에서 해당 지역/차종 보조금(국비+지방비 합계)을 확인해 수동 입력 후 저장해줘.";
pub(super) const FETCH_FAILED_MESSAGE: &str =
    "자동 조회 실패(네트워크/차단/구조변경). ev.or.kr에서 수동 확인 후 입력해줘.";

const CACHE_SOURCE: &str = "cache";
const MANUAL_MODE: &str = "manual";

/// Lookup inputs. A repeated key keeps its first value.
#[derive(Debug, Default)]
pub(super) struct SubsidyQuery {
    pub region: Option<String>,
    pub trim: Option<String>,
}

impl SubsidyQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "region" => &mut query.region,
                "trim" => &mut query.trim,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
struct InvalidRequest {
    ok: bool,
    error: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubsidyFound {
    ok: bool,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    /// Epoch milliseconds of the cache generation that holds the amount.
    updated_at: i64,
    region: String,
    trim: String,
    subsidy_won: u64,
}

/// Manual-mode body: automated lookup failed and the user must enter the
/// amount. Exactly one of `reason` / `error` is set.
#[derive(Debug, Serialize)]
struct ManualFallback {
    ok: bool,
    mode: &'static str,
    region: String,
    trim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<NotFoundReason>,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SubsidyFound {
    fn new(
        source: &str,
        method: Option<String>,
        updated_at: DateTime<Utc>,
        region: String,
        trim: String,
        subsidy_won: u64,
    ) -> Self {
        Self {
            ok: true,
            source: source.to_owned(),
            method,
            updated_at: updated_at.timestamp_millis(),
            region,
            trim,
            subsidy_won,
        }
    }
}

/// `GET /api/subsidy?region=..&trim=..`
///
/// Only missing input is a client error. Every upstream or extraction
/// failure is answered with 200 and a manual-mode body.
pub(super) async fn get_subsidy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(pairs)) => SubsidyQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unreadable query string");
            SubsidyQuery::default()
        }
    };
    let region = normalize(query.region.as_deref().unwrap_or_default());
    let trim = query.trim.as_deref().unwrap_or_default().trim().to_owned();

    if region.is_empty() || trim.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(InvalidRequest {
                ok: false,
                error: MISSING_PARAMS,
            }),
        )
            .into_response();
    }

    if let Some(hit) = state.cache.get(&region, &trim).await {
        tracing::debug!(request_id = %req_id.0, %region, %trim, "subsidy cache hit");
        return cached(hit, region, trim);
    }

    // Concurrent misses queue here; whoever goes second usually finds the
    // first one's result already cached.
    let _refresh = state.refresh_lock.lock().await;
    if let Some(hit) = state.cache.get(&region, &trim).await {
        return cached(hit, region, trim);
    }

    let html = match state.client.fetch_page().await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(
                request_id = %req_id.0,
                %region,
                %trim,
                error = %e,
                "subsidy source fetch failed; answering in manual mode"
            );
            return manual(ManualFallback {
                ok: false,
                mode: MANUAL_MODE,
                region,
                trim,
                reason: None,
                message: FETCH_FAILED_MESSAGE,
                error: Some(e.to_string()),
            });
        }
    };

    let page = normalize(&html);
    match extract(&page, &region, &trim) {
        ExtractionResult::Found {
            amount_won,
            provenance,
        } => {
            let updated_at = state.cache.put(&region, &trim, amount_won).await;
            tracing::info!(
                request_id = %req_id.0,
                %region,
                %trim,
                amount_won,
                method = %provenance,
                "extracted subsidy"
            );
            Json(SubsidyFound::new(
                state.client.source_id(),
                Some(provenance.to_string()),
                updated_at,
                region,
                trim,
                amount_won,
            ))
            .into_response()
        }
        ExtractionResult::NotFound { reason } => {
            tracing::info!(
                request_id = %req_id.0,
                %region,
                %trim,
                %reason,
                "subsidy not found in source page; answering in manual mode"
            );
            manual(ManualFallback {
                ok: false,
                mode: MANUAL_MODE,
                region,
                trim,
                reason: Some(reason),
                message: EXTRACTION_FAILED_MESSAGE,
                error: None,
            })
        }
    }
}

fn cached(hit: crate::cache::CacheHit, region: String, trim: String) -> Response {
    Json(SubsidyFound::new(
        CACHE_SOURCE,
        None,
        hit.updated_at,
        region,
        trim,
        hit.amount_won,
    ))
    .into_response()
}

fn manual(body: ManualFallback) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}
