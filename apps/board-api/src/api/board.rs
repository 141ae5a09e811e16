//! Board API routes
//!
//! This module wires up the board domain to HTTP routes.

use axum::Router;
use domain_board::{BoardService, MongoBoardStore, handlers};
use tracing::info;

use crate::state::AppState;

/// Create board collection indexes at startup
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let store = MongoBoardStore::new(db.clone());
    store
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create board indexes: {}", e))?;
    info!("Board collection indexes created");
    Ok(())
}

/// Create the board router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB store
    let store = MongoBoardStore::new(state.db.clone());

    // Create the service
    let service = BoardService::new(store);

    // Return the domain's router
    handlers::router(service)
}
