use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::migrate::MigrateError;
use sqlx::AnyPool;
use std::time::Duration;

/// Create a connection pool for the database at `database_url`
///
/// Accepts any URL scheme with a compiled-in driver (`postgres://`, `sqlite:`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(max_connections.min(2))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

/// Apply any pending migrations from `./migrations`
pub async fn run_migrations(pool: &AnyPool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete");

    Ok(())
}
