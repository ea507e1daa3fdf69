use chrono::Utc;
use sqlx::Row;
use std::collections::BTreeMap;

use crate::db::Db;
use crate::error::Result;
use crate::models::WinnerRecord;

// NULLs bound through the `Any` driver reach Postgres typed as integers, so the
// nullable text column gets an explicit cast.
const INSERT_WINNER: &str = r#"
INSERT INTO game_winners (
    session_id, winning_ball_color, selected_ball_color, ball_count, ball_radius,
    obstacle_count, max_size, movement_speed, jump_force, created_at
)
VALUES ($1, $2, CAST($3 AS TEXT), $4, $5, $6, $7, $8, $9, $10)
"#;

const COUNT_WINS_BY_COLOR: &str = r#"
SELECT winning_ball_color, COUNT(*) AS wins
FROM game_winners
GROUP BY winning_ball_color
"#;

/// Append-only log of finished games
#[derive(Clone)]
pub struct WinnerStore {
    pool: Db,
}

impl WinnerStore {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Append one game result, stamped with the current time
    ///
    /// The returned record is the input plus its `created_at`. Nothing is read
    /// back: the `Any` driver cannot decode NULL columns into `Option`s.
    pub async fn record(&self, winner: &WinnerRecord) -> Result<WinnerRecord> {
        let created_at = Utc::now().timestamp();

        sqlx::query(INSERT_WINNER)
            .bind(winner.session_id.as_str())
            .bind(winner.winning_ball_color.as_str())
            .bind(winner.selected_ball_color.as_deref())
            .bind(winner.ball_count)
            .bind(winner.ball_radius)
            .bind(winner.obstacle_count)
            .bind(winner.max_size)
            .bind(winner.movement_speed)
            .bind(winner.jump_force)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(WinnerRecord {
            created_at,
            ..winner.clone()
        })
    }

    /// Number of wins per winning ball colour
    pub async fn color_stats(&self) -> Result<BTreeMap<String, i64>> {
        let rows = sqlx::query(COUNT_WINS_BY_COLOR)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<(String, i64)> {
                Ok((row.try_get("winning_ball_color")?, row.try_get("wins")?))
            })
            .collect()
    }
}
