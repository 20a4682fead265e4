use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::astro::{
    moon_phase, solunar_periods, solunar_rating_at, MoonPhaseData, SolunarPeriods, SolunarRating,
    SolunarStatus,
};
use crate::astro::is_in_solunar_period;
use crate::config::Config;
use crate::engine::RecommendationEngine;
use crate::types::{RecommendationRequest, RecommendationResponse};

#[derive(Clone)]
struct ApiState {
    engine: Arc<RecommendationEngine>,
    config: Config,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
struct MoonQuery {
    /// RFC 3339 instant; defaults to now.
    at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
struct SolunarQuery {
    lat: f64,
    lon: f64,
    /// Calendar date; defaults to today (UTC).
    date: Option<NaiveDate>,
    at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct SolunarResponse {
    periods: SolunarPeriods,
    status: SolunarStatus,
    rating: SolunarRating,
}

pub async fn run_server(config: Config, engine: Arc<RecommendationEngine>, bind: SocketAddr) -> Result<()> {
    let state = ApiState { engine, config };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/config", get(show_config))
        .route("/v1/recommendations", post(recommendations))
        .route("/v1/moon", get(moon))
        .route("/v1/solunar", get(solunar))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse { status: "ok" })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

async fn recommendations(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(request): Json<RecommendationRequest>,
) -> Json<ApiResponse<RecommendationResponse>> {
    let requester = requester_from_headers(&headers);
    let response = state.engine.recommend(&request, requester.as_deref()).await;
    ok(response)
}

async fn moon(Query(query): Query<MoonQuery>) -> Json<ApiResponse<MoonPhaseData>> {
    ok(moon_phase(query.at.unwrap_or_else(Utc::now)))
}

async fn solunar(Query(query): Query<SolunarQuery>) -> ApiResult<SolunarResponse> {
    if !query.lat.is_finite() || query.lat.abs() > 90.0 {
        return Err(ApiError::bad_request("lat must be within [-90, 90]"));
    }
    if !query.lon.is_finite() || query.lon.abs() > 180.0 {
        return Err(ApiError::bad_request("lon must be within [-180, 180]"));
    }
    let now = query.at.unwrap_or_else(Utc::now);
    let date = query.date.unwrap_or_else(|| now.date_naive());
    let periods = solunar_periods(date, query.lat, query.lon);
    let status = is_in_solunar_period(&periods, now);
    let rating = solunar_rating_at(&periods, &moon_phase(now), now);
    Ok(ok(SolunarResponse {
        periods,
        status,
        rating,
    }))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

/// Callers identify themselves with an API key header; anonymous callers get
/// the free tier.
fn requester_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_header_identifies_the_requester() {
        let mut headers = HeaderMap::new();
        assert!(requester_from_headers(&headers).is_none());
        headers.insert("x-api-key", "  ".parse().unwrap());
        assert!(requester_from_headers(&headers).is_none());
        headers.insert("x-api-key", "angler-123".parse().unwrap());
        assert_eq!(requester_from_headers(&headers).as_deref(), Some("angler-123"));
    }
}
