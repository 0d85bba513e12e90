//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Datelike;
use tracing::warn;

use crate::composer::{CONNECTION_SCAN_RESULTS, Composer, SearchError, SearchOptions};
use crate::report::ReportFormatter;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/flights/search", get(search_flights))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for direct and connecting flights between two airports.
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<FlightSearchRequest>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let options = SearchOptions {
        max_results: req.max_results.map(|n| n.min(CONNECTION_SCAN_RESULTS)),
        min_layover_mins: None,
        departure_day: req.date.map(|d| d.weekday()),
    };

    let store = state.store.lock().await;
    let composer = Composer::new(&*store, &*store, &state.hubs, &state.config);
    let outcome = composer.search_with_options(&req.from, &req.to, &options)?;

    let include_connections = req.include_connections.unwrap_or(true);
    let formatter = ReportFormatter::new(&*store);

    let direct_flights: Vec<_> = outcome
        .direct
        .iter()
        .filter_map(|i| formatter.direct_record(i))
        .collect();

    let connecting_flights: Vec<_> = if include_connections {
        outcome
            .one_stop
            .iter()
            .chain(&outcome.two_stop)
            .filter_map(|i| formatter.connection_record(i))
            .collect()
    } else {
        Vec::new()
    };

    Ok(Json(FlightSearchResponse {
        origin: outcome.origin.to_string(),
        destination: outcome.destination.to_string(),
        direct_count: direct_flights.len(),
        connecting_count: connecting_flights.len(),
        has_direct: !direct_flights.is_empty(),
        has_connections: !connecting_flights.is_empty(),
        direct_flights,
        connecting_flights,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidCode { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Storage(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::StoreError;

    #[test]
    fn search_errors_map_to_http_statuses() {
        let bad = AppError::from(SearchError::InvalidCode {
            field: "origin",
            value: "XYZW".into(),
        });
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let storage = AppError::from(SearchError::Storage(StoreError::Open {
            path: "flights.db".into(),
            message: "locked".into(),
        }));
        assert!(matches!(storage, AppError::Internal { .. }));
    }
}
