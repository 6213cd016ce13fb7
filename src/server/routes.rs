//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::geo::Suggestion;
use crate::search::SearchState;
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/state", get(state_handler))
        .route("/api/query", post(query_handler))
        .route("/api/select", post(select_handler))
        .route("/api/search", post(search_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "SESSION_CLOSED" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::ControllerClosed => "SESSION_CLOSED",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Geocoding(_) => "GEOCODING_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Geocoding service base URL
    pub geocoder: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        geocoder: state.config.service.base_url.clone(),
        uptime_secs: state.uptime().as_secs(),
    })
}

/// Current search state
///
/// GET /api/state
async fn state_handler(State(state): State<Arc<AppState>>) -> Json<SearchState> {
    Json(state.search.state())
}

/// Query request body
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// New contents of the search field
    pub text: String,
}

/// Replace the search field text
///
/// POST /api/query
///
/// Suggestions arrive asynchronously; poll /api/state for them.
async fn query_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> Result<(StatusCode, Json<SearchState>), ApiError> {
    state.search.set_query(req.text)?;
    Ok((StatusCode::ACCEPTED, Json(state.search.state())))
}

/// Select request body
///
/// Either the suggestion as the client displayed it, or its position in the
/// list currently published at /api/state.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SelectRequest {
    Suggestion(Suggestion),
    Index { index: usize },
}

/// Choose a suggestion and look it up
///
/// POST /api/select
///
/// The chosen suggestion is resolved here, so a completion landing after
/// this request cannot change which place gets looked up.
async fn select_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> Result<(StatusCode, Json<SearchState>), ApiError> {
    let suggestion = match req {
        SelectRequest::Suggestion(suggestion) => suggestion,
        SelectRequest::Index { index } => state.search.suggestion(index).ok_or_else(|| ApiError {
            error: format!(
                "No suggestion at index {} ({} available)",
                index,
                state.search.state().suggestions.len()
            ),
            code: "INVALID_SELECTION".to_string(),
        })?,
    };

    state.search.select(suggestion)?;
    Ok((StatusCode::ACCEPTED, Json(state.search.state())))
}

/// Look up the search field as typed
///
/// POST /api/search
async fn search_handler(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SearchState>), ApiError> {
    state.search.search()?;
    Ok((StatusCode::ACCEPTED, Json(state.search.state())))
}
