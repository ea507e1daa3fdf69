use chrono::Utc;

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::SettingsRecord;

const UPSERT_SETTINGS: &str = r#"
INSERT INTO game_settings (
    session_id, ball_count, ball_radius, obstacle_count,
    max_size, movement_speed, jump_force, updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (session_id) DO UPDATE
SET ball_count = EXCLUDED.ball_count,
    ball_radius = EXCLUDED.ball_radius,
    obstacle_count = EXCLUDED.obstacle_count,
    max_size = EXCLUDED.max_size,
    movement_speed = EXCLUDED.movement_speed,
    jump_force = EXCLUDED.jump_force,
    updated_at = EXCLUDED.updated_at
RETURNING session_id, ball_count, ball_radius, obstacle_count,
          max_size, movement_speed, jump_force, updated_at
"#;

const SELECT_SETTINGS: &str = r#"
SELECT session_id, ball_count, ball_radius, obstacle_count,
       max_size, movement_speed, jump_force, updated_at
FROM game_settings
WHERE session_id = $1
"#;

/// Settings persistence keyed by session ID
#[derive(Clone)]
pub struct SettingsStore {
    pool: Db,
}

impl SettingsStore {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Insert the record, or overwrite every field of the existing row for its session
    ///
    /// `updated_at` is always stamped with the current time.
    pub async fn save(&self, record: &SettingsRecord) -> Result<SettingsRecord> {
        let stored = sqlx::query_as::<_, SettingsRecord>(UPSERT_SETTINGS)
            .bind(record.session_id.as_str())
            .bind(record.ball_count)
            .bind(record.ball_radius)
            .bind(record.obstacle_count)
            .bind(record.max_size)
            .bind(record.movement_speed)
            .bind(record.jump_force)
            .bind(Utc::now().timestamp())
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Upserted settings row for session {}", stored.session_id);

        Ok(stored)
    }

    /// Look up the settings for a session
    pub async fn get(&self, session_id: &str) -> Result<SettingsRecord> {
        sqlx::query_as::<_, SettingsRecord>(SELECT_SETTINGS)
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::SettingsNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_db;

    fn sample(session_id: &str) -> SettingsRecord {
        SettingsRecord {
            session_id: session_id.to_string(),
            ball_count: 15,
            ball_radius: 25.0,
            obstacle_count: 10,
            max_size: 2.0,
            movement_speed: 3.0,
            jump_force: 0.2,
            updated_at: 0,
        }
    }

    async fn row_count(pool: &Db) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM game_settings")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = SettingsStore::new(test_db().await);

        let saved = store.save(&sample("session-a")).await.unwrap();
        assert_eq!(saved.session_id, "session-a");
        assert_eq!(saved.ball_count, 15);
        assert!(saved.updated_at > 0);

        let loaded = store.get("session-a").await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_get_missing_session() {
        let store = SettingsStore::new(test_db().await);

        let result = store.get("never-saved").await;
        assert!(matches!(result, Err(AppError::SettingsNotFound)));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_row() {
        let pool = test_db().await;
        let store = SettingsStore::new(pool.clone());

        store.save(&sample("session-a")).await.unwrap();

        let mut updated = sample("session-a");
        updated.ball_count = 30;
        updated.jump_force = 0.3;
        let saved = store.save(&updated).await.unwrap();
        assert_eq!(saved.ball_count, 30);

        let loaded = store.get("session-a").await.unwrap();
        assert_eq!(loaded.ball_count, 30);
        assert_eq!(loaded.jump_force, 0.3);
        assert_eq!(loaded.ball_radius, 25.0);
        assert_eq!(loaded.obstacle_count, 10);

        assert_eq!(row_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let pool = test_db().await;
        let store = SettingsStore::new(pool.clone());

        store.save(&sample("session-a")).await.unwrap();
        let mut other = sample("session-b");
        other.ball_count = 99;
        store.save(&other).await.unwrap();

        assert_eq!(store.get("session-a").await.unwrap().ball_count, 15);
        assert_eq!(store.get("session-b").await.unwrap().ball_count, 99);
        assert_eq!(row_count(&pool).await, 2);
    }
}
