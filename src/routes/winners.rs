use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::ERR_WINNING_COLOR_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::WinnerRecord;
use crate::routes::validation::{
    check_color, check_count, check_non_negative, check_positive, require_session_id,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWinnerRequest {
    pub session_id: Option<String>,
    pub winning_ball_color: Option<String>,
    pub selected_ball_color: Option<String>,
    pub ball_count: Option<i64>,
    pub ball_radius: Option<f64>,
    pub obstacle_count: Option<i64>,
    pub max_size: Option<f64>,
    pub movement_speed: Option<f64>,
    pub jump_force: Option<f64>,
}

impl RecordWinnerRequest {
    /// Only the session and winning colour are mandatory; game parameters are
    /// checked against the settings bounds when present.
    pub fn into_record(self) -> Result<WinnerRecord> {
        let winning_ball_color = self
            .winning_ball_color
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::InvalidInput(ERR_WINNING_COLOR_REQUIRED.to_string()))?;

        Ok(WinnerRecord {
            session_id: require_session_id(self.session_id)?,
            winning_ball_color: check_color(winning_ball_color)?,
            selected_ball_color: self.selected_ball_color.map(check_color).transpose()?,
            ball_count: self
                .ball_count
                .map(|v| check_count(v, "ballCount"))
                .transpose()?,
            ball_radius: self
                .ball_radius
                .map(|v| check_positive(v, "ballRadius"))
                .transpose()?,
            obstacle_count: self
                .obstacle_count
                .map(|v| check_count(v, "obstacleCount"))
                .transpose()?,
            max_size: self
                .max_size
                .map(|v| check_positive(v, "maxSize"))
                .transpose()?,
            movement_speed: self
                .movement_speed
                .map(|v| check_non_negative(v, "movementSpeed"))
                .transpose()?,
            jump_force: self
                .jump_force
                .map(|v| check_non_negative(v, "jumpForce"))
                .transpose()?,
            created_at: 0,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecordWinnerResponse {
    pub message: &'static str,
    pub winner: WinnerRecord,
}

#[derive(Debug, Serialize)]
pub struct ColorStatsResponse {
    #[serde(rename = "colorStats")]
    pub color_stats: BTreeMap<String, i64>,
}

/// Log the outcome of a finished game
pub async fn record_winner(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RecordWinnerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordWinnerResponse>)> {
    let Json(payload) = payload?;

    let record = payload.into_record().map_err(|e| {
        tracing::warn!("Invalid winner payload: {}", e);
        e
    })?;

    let winner = state.winners.record(&record).await?;

    tracing::info!(
        "Winner recorded for session {}: {}",
        winner.session_id,
        winner.winning_ball_color
    );

    Ok((
        StatusCode::CREATED,
        Json(RecordWinnerResponse {
            message: "Winner data saved successfully",
            winner,
        }),
    ))
}

/// Win counts per ball colour across all recorded games
pub async fn color_stats(State(state): State<AppState>) -> Result<Json<ColorStatsResponse>> {
    let color_stats = state.winners.color_stats().await?;

    tracing::info!("Color statistics retrieved: {} colors", color_stats.len());

    Ok(Json(ColorStatsResponse { color_stats }))
}
