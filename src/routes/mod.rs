pub mod health;
pub mod settings;
pub mod validation;
pub mod winners;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::AppState;

pub use health::health_check;
pub use settings::{get_settings, save_settings};
pub use winners::{color_stats, record_winner};

/// Build the API router; transport layers (CORS, tracing) are added by the caller
///
/// Unmatched paths and methods answer with the same `{"error"}` body as handler failures.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route("/api/settings", post(save_settings).fallback(method_not_allowed))
        .route(
            "/api/settings/:session_id",
            get(get_settings).fallback(method_not_allowed),
        )
        .route("/api/winners", post(record_winner).fallback(method_not_allowed))
        .route("/api/color-stats", get(color_stats).fallback(method_not_allowed))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
