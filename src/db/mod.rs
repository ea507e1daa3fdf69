pub mod pool;
pub mod settings;
pub mod winners;

pub use pool::{create_pool, run_migrations};
pub use settings::SettingsStore;
pub use winners::WinnerStore;

/// Database handle type (the pool is internally reference-counted)
pub type Db = sqlx::AnyPool;

/// Fresh in-memory SQLite database with all migrations applied
///
/// A single connection keeps every query on the same in-memory database.
#[cfg(test)]
pub(crate) async fn test_db() -> Db {
    let pool = create_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}
