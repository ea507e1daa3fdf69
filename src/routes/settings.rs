use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::SettingsRecord;
use crate::routes::validation::{
    check_count, check_non_negative, check_positive, require, require_session_id,
};
use crate::AppState;

/// Client payload; every field is optional here so a missing one becomes a 400, not a 422
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    pub session_id: Option<String>,
    pub ball_count: Option<i64>,
    pub ball_radius: Option<f64>,
    pub obstacle_count: Option<i64>,
    pub max_size: Option<f64>,
    pub movement_speed: Option<f64>,
    pub jump_force: Option<f64>,
}

impl SaveSettingsRequest {
    /// Validate the payload and map external names onto a storage record
    pub fn into_record(self) -> Result<SettingsRecord> {
        Ok(SettingsRecord {
            session_id: require_session_id(self.session_id)?,
            ball_count: check_count(require(self.ball_count, "ballCount")?, "ballCount")?,
            ball_radius: check_positive(require(self.ball_radius, "ballRadius")?, "ballRadius")?,
            obstacle_count: check_count(
                require(self.obstacle_count, "obstacleCount")?,
                "obstacleCount",
            )?,
            max_size: check_positive(require(self.max_size, "maxSize")?, "maxSize")?,
            movement_speed: check_non_negative(
                require(self.movement_speed, "movementSpeed")?,
                "movementSpeed",
            )?,
            jump_force: check_non_negative(require(self.jump_force, "jumpForce")?, "jumpForce")?,
            updated_at: 0,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub message: &'static str,
    pub settings: SettingsRecord,
}

#[derive(Debug, Serialize)]
pub struct GetSettingsResponse {
    pub settings: SettingsRecord,
}

/// Save or overwrite the settings for a session
///
/// Responds 201 with the stored row on both first save and update.
pub async fn save_settings(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveSettingsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveSettingsResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected settings payload: {}", rejection.body_text());
        rejection
    })?;

    let record = payload.into_record().map_err(|e| {
        tracing::warn!("Invalid settings payload: {}", e);
        e
    })?;

    let settings = state.settings.save(&record).await?;

    tracing::info!("Settings saved for session {}", settings.session_id);

    Ok((
        StatusCode::CREATED,
        Json(SaveSettingsResponse {
            message: "Settings saved successfully",
            settings,
        }),
    ))
}

/// Retrieve the settings for a session, 404 if none were ever saved
pub async fn get_settings(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GetSettingsResponse>> {
    let settings = state.settings.get(&session_id).await.map_err(|e| {
        tracing::info!("No settings for session {}: {}", session_id, e);
        e
    })?;

    tracing::info!("Settings retrieved for session {}", session_id);

    Ok(Json(GetSettingsResponse { settings }))
}
