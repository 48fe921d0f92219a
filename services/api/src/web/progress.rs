//! services/api/src/web/progress.rs
//!
//! Learner watch progress on videos.

use crate::web::middleware::CurrentUser;
use crate::web::rest::{port_failure, HandlerError};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use chrono::{DateTime, Utc};
use learnsolve_core::domain::{ProgressUpdate, UserProgress};
use learnsolve_core::stats::progress_stats;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ProgressResponse {
    pub id: Uuid,
    pub video_id: Uuid,
    pub progress_percent: u8,
    pub completed: bool,
    pub last_watched_at: DateTime<Utc>,
}

impl From<UserProgress> for ProgressResponse {
    fn from(p: UserProgress) -> Self {
        Self {
            id: p.id,
            video_id: p.video_id,
            progress_percent: p.progress_percent,
            completed: p.completed,
            last_watched_at: p.last_watched_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProgressStatsResponse {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub completion_rate: u32,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProgressRequest {
    /// Values above 100 are clamped; 100 marks the video completed.
    pub progress_percent: u32,
}

async fn save_progress(
    app_state: &AppState,
    user_id: Uuid,
    video_id: Uuid,
    update: ProgressUpdate,
) -> Result<Json<ProgressResponse>, HandlerError> {
    let progress = app_state
        .db
        .upsert_progress(user_id, video_id, update)
        .await
        .map_err(|e| port_failure("save progress", e))?;
    debug!(
        "Progress for user {} on video {}: {}%",
        user_id, video_id, progress.progress_percent
    );
    Ok(Json(progress.into()))
}

/// Record how far the caller has watched a video.
#[utoipa::path(
    put,
    path = "/progress/{video_id}",
    request_body = UpdateProgressRequest,
    params(
        ("video_id" = Uuid, Path, description = "Video id"),
        ("x-user-id" = Uuid, Header, description = "The learner's user id.")
    ),
    responses(
        (status = 200, description = "Progress saved", body = ProgressResponse),
        (status = 404, description = "Unknown video")
    )
)]
pub async fn update_progress_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<ProgressResponse>, HandlerError> {
    save_progress(&app_state, user_id, video_id, ProgressUpdate::from_percent(req.progress_percent)).await
}

/// Mark a video as fully watched.
#[utoipa::path(
    post,
    path = "/progress/{video_id}/complete",
    params(
        ("video_id" = Uuid, Path, description = "Video id"),
        ("x-user-id" = Uuid, Header, description = "The learner's user id.")
    ),
    responses(
        (status = 200, description = "Progress saved", body = ProgressResponse),
        (status = 404, description = "Unknown video")
    )
)]
pub async fn complete_video_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
) -> Result<Json<ProgressResponse>, HandlerError> {
    save_progress(&app_state, user_id, video_id, ProgressUpdate::completed()).await
}

/// The caller's progress records, most recently watched first.
#[utoipa::path(
    get,
    path = "/progress",
    params(("x-user-id" = Uuid, Header, description = "The learner's user id.")),
    responses((status = 200, description = "Progress records", body = Vec<ProgressResponse>))
)]
pub async fn list_progress_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<Vec<ProgressResponse>>, HandlerError> {
    let progress = app_state
        .db
        .get_progress_for_user(user_id)
        .await
        .map_err(|e| port_failure("list progress", e))?;
    Ok(Json(progress.into_iter().map(ProgressResponse::from).collect()))
}

/// Completion statistics over the caller's progress records.
#[utoipa::path(
    get,
    path = "/stats/progress",
    params(("x-user-id" = Uuid, Header, description = "The learner's user id.")),
    responses((status = 200, description = "Aggregated progress", body = ProgressStatsResponse))
)]
pub async fn progress_stats_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<ProgressStatsResponse>, HandlerError> {
    let progress = app_state
        .db
        .get_progress_for_user(user_id)
        .await
        .map_err(|e| port_failure("load progress", e))?;

    let stats = progress_stats(&progress);
    Ok(Json(ProgressStatsResponse {
        total: stats.total,
        completed: stats.completed,
        in_progress: stats.in_progress,
        not_started: stats.not_started,
        completion_rate: stats.completion_rate,
    }))
}
