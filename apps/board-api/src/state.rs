//! Shared application state

use mongodb::{Client, Database};

/// State handed to the API routers at startup.
///
/// Cloning is cheap (the MongoDB client is an `Arc` around its connection
/// pool), so each router gets its own copy.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, kept for readiness checks and shutdown cleanup
    pub mongo_client: Client,
    /// Database holding the section and task collections
    pub db: Database,
}
