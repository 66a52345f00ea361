//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::requests::{RequestError, Response, StatRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stats", post(stats))
        .route("/map", get(map))
        .route("/route", get(route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Answer a batch of stat requests against the loaded network.
async fn stats(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Result<Json<Vec<Response>>, AppError> {
    let responses = state.service.process(&requests)?;
    Ok(Json(responses))
}

/// The network map as an SVG document.
async fn map(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let svg = state.service.map()?.to_string();
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Fastest itinerary between two stops.
async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResult>, AppError> {
    let entry = state
        .cache
        .plan(&state.service, &query.from, &query.to)
        .await?;

    match entry.as_ref() {
        Some(itinerary) => Ok(Json(RouteResult::new(query, itinerary))),
        None => Err(AppError::NotFound {
            message: format!("no route from {:?} to {:?}", query.from, query.to),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::MissingRenderSettings | RequestError::MissingRoutingSettings => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            RequestError::Json(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
