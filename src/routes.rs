use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{any, get},
    Router,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    config::Config,
    error::ApiError,
    forecast::generate_sample_weather,
    utils::local_now,
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// An inbound weather request reduced to the two places a city can come from.
#[derive(Debug, Default)]
pub struct WeatherRequest {
    pub query_params: HashMap<String, String>,
    pub body: Option<Bytes>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySource {
    Query,
    Body,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Parse a request body as JSON, yielding `None` for anything unparseable.
pub fn try_parse_json(bytes: &[u8]) -> Option<serde_json::Value> {
    serde_json::from_slice(bytes).ok()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Resolve the city name: query string first, then the JSON body.
pub fn resolve_city(request: &WeatherRequest) -> Option<(String, CitySource)> {
    if let Some(city) = non_empty(request.query_params.get("city").map(String::as_str)) {
        return Some((city, CitySource::Query));
    }

    let body = request.body.as_deref().and_then(try_parse_json)?;
    non_empty(body.get("city").and_then(|v| v.as_str())).map(|city| (city, CitySource::Body))
}

/// Resolve the city and render the pretty-printed report for it.
pub fn handle_weather_request(
    request: &WeatherRequest,
    now: NaiveDateTime,
) -> Result<String, ApiError> {
    let (city, source) = resolve_city(request).ok_or(ApiError::Validation)?;
    tracing::debug!(city = %city, source = ?source, "Resolved city");

    let report = generate_sample_weather(&city, now);
    Ok(serde_json::to_string_pretty(&report)?)
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unreadable query strings and bodies count as sources without a city.
pub async fn weather(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    tracing::info!(%method, "Weather API processed a request");

    let query_params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!("Ignoring unreadable query string: {}", e);
            HashMap::new()
        }
    };
    let body = match body {
        Ok(bytes) => (!bytes.is_empty()).then_some(bytes),
        Err(e) => {
            tracing::debug!("Ignoring unreadable request body: {}", e);
            None
        }
    };

    let request = WeatherRequest { query_params, body };

    match handle_weather_request(&request, local_now(state.config.app_timezone)) {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Turn a handler panic into the generic internal-error response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/weather", any(weather))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
