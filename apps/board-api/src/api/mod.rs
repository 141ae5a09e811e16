//! HTTP API routes for the board service

pub mod board;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Assemble the board and readiness routes.
/// The caller nests the result under `/api` via `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(board::router(state))
        .merge(health::router(state.clone()))
}
