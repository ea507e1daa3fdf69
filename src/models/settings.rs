use serde::Serialize;

use crate::constants::MAX_SESSION_ID_LEN;

/// Persisted game settings for one session
///
/// Serializes with the storage (snake_case) field names.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SettingsRecord {
    /// Client-provided session identifier (unique key)
    pub session_id: String,
    pub ball_count: i64,
    pub ball_radius: f64,
    pub obstacle_count: i64,
    pub max_size: f64,
    pub movement_speed: f64,
    pub jump_force: f64,
    /// When the row was last written (Unix timestamp), kept for auditing only
    #[serde(skip)]
    pub updated_at: i64,
}

impl SettingsRecord {
    /// Validate that a session ID is within the length limit (in characters)
    pub fn validate_session_id(id: &str) -> bool {
        id.chars().count() <= MAX_SESSION_ID_LEN
    }
}
