//! Board Domain
//!
//! Sections and tasks for a kanban-style board, stored in MongoDB. A task is
//! owned by exactly one section; the section keeps an ordered list of its task
//! ids. The store has no multi-record transactions, so the service layer runs
//! every cross-record change as an ordered sequence of idempotent single-record
//! writes and offers a `reconcile` pass that repairs whatever a crash between
//! steps left behind.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, cross-record coordination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Data access (trait + MongoDB / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_board::{
//!     handlers,
//!     mongodb::MongoBoardStore,
//!     service::BoardService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let store = MongoBoardStore::new(db);
//! let service = BoardService::new(store);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BoardError, BoardResult};
pub use handlers::ApiDoc;
pub use models::{
    Assignee, CreateSection, CreateTask, MoveTask, ReconcileReport, Section, SectionWithTasks,
    Task, UpdateTask,
};
pub use mongodb::MongoBoardStore;
pub use repository::{BoardStore, InMemoryBoardStore};
pub use service::BoardService;
