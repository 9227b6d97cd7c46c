//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::{RouteError, RoutePlanner, add_place, list_edges, set_edge_status};
use crate::storage::RouteStore;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: RouteStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/route", get(get_route::<S>).put(toggle_edge::<S>))
        .route("/api/distance", get(get_distances::<S>))
        .route("/api/destination", post(add_destination::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Shortest route between two places, as an ordered list of places.
///
/// An unreachable destination is an empty list, not an error.
async fn get_route<S: RouteStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<Vec<PlaceResult>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;
    let request = query.to_request(state.config.nearby_radius_km)?;
    let result = RoutePlanner::new(state.store.as_ref())
        .plan(&request)
        .await?;

    Ok(Json(result.places.iter().map(PlaceResult::from).collect()))
}

/// Turn an edge on or off.
async fn toggle_edge<S: RouteStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let req: ToggleEdgeRequest = parse_json(&body)?;
    let (edge, active) = req.parts()?;

    set_edge_status(state.store.as_ref(), edge, active).await?;

    Ok(Json(MessageResponse {
        message: "Status updated successfully.".to_string(),
    }))
}

/// Every edge record.
async fn get_distances<S: RouteStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<EdgeResult>>, AppError> {
    let edges = list_edges(state.store.as_ref()).await?;
    Ok(Json(edges.iter().map(EdgeResult::from).collect()))
}

/// Store a new place.
async fn add_destination<S: RouteStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<Vec<PlaceResult>>, AppError> {
    let req: AddDestinationRequest = parse_json(&body)?;
    let place = req.to_new_place().map_err(RouteError::from)?;

    let inserted = add_place(state.store.as_ref(), place).await?;
    Ok(Json(inserted.iter().map(PlaceResult::from).collect()))
}

/// Parse a JSON body by hand so the raw body can be logged on failure.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::NotFound(message) => AppError::NotFound { message },
            RouteError::Upstream(_) => AppError::Upstream {
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
            AppError::Upstream { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
