//! Campsite Favorites - per-user favorite campsites over HTTP.
//!
//! An authenticated user keeps one favorites record: an ordered set of
//! campsite ids. The API adds, removes and lists them.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Favorites record, campsite and owner read models
//! - **services**: Favorites use cases and token verification
//! - **infra**: Database, migrations, repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CampsiteId, FavoritesOutcome, FavoritesRecord, NoOpReason};
pub use errors::{AppError, AppResult};
