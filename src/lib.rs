//! Game Settings Server Library
//!
//! Persists per-session game settings and finished-game results behind a small
//! JSON API. This module exports the core types for the binary and for testing.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, run_migrations, Db, SettingsStore, WinnerStore};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub settings: SettingsStore,
    pub winners: WinnerStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database pool and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self {
            settings: SettingsStore::new(db.clone()),
            winners: WinnerStore::new(db.clone()),
            db,
            config,
        }
    }
}
