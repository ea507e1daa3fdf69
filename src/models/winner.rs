use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// One finished game, as logged by the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinnerRecord {
    pub session_id: String,
    pub winning_ball_color: String,
    pub selected_ball_color: Option<String>,
    pub ball_count: Option<i64>,
    pub ball_radius: Option<f64>,
    pub obstacle_count: Option<i64>,
    pub max_size: Option<f64>,
    pub movement_speed: Option<f64>,
    pub jump_force: Option<f64>,
    /// Unix timestamp, rendered as RFC 3339
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: i64,
}

fn serialize_timestamp<S: Serializer>(timestamp: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    let dt = DateTime::from_timestamp(*timestamp, 0).unwrap_or_else(Utc::now);
    serializer.serialize_str(&dt.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let record = WinnerRecord {
            session_id: "abc".to_string(),
            winning_ball_color: "red".to_string(),
            selected_ball_color: None,
            ball_count: Some(15),
            ball_radius: None,
            obstacle_count: None,
            max_size: None,
            movement_speed: None,
            jump_force: None,
            created_at: 1733788800,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["created_at"], "2024-12-10T00:00:00+00:00");
        assert_eq!(value["winning_ball_color"], "red");
        assert!(value["selected_ball_color"].is_null());
    }
}
