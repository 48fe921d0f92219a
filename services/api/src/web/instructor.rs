//! services/api/src/web/instructor.rs
//!
//! Instructor dashboard analytics.

use crate::web::middleware::CurrentUser;
use crate::web::rest::{port_failure, HandlerError};
use crate::web::state::AppState;
use axum::{extract::State, response::Json, Extension};
use learnsolve_core::domain::{Doubt, DoubtFilter};
use learnsolve_core::stats::instructor_stats;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct InstructorStatsResponse {
    pub total_videos: usize,
    pub linked_videos: usize,
    pub total_doubts: usize,
    pub pending_doubts: usize,
    pub resolved_doubts: usize,
    pub quiz_attempts: usize,
    /// Rounded mean of all attempt scores; 0 with no attempts.
    pub avg_quiz_score: u32,
}

/// Totals over the caller's videos, the doubts raised on them, and all quiz attempts.
#[utoipa::path(
    get,
    path = "/instructor/stats",
    params(("x-user-id" = Uuid, Header, description = "The instructor's user id.")),
    responses(
        (status = 200, description = "Dashboard totals", body = InstructorStatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn instructor_stats_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<InstructorStatsResponse>, HandlerError> {
    let db = &app_state.db;
    let (videos, doubts, attempts) = futures::try_join!(
        db.list_videos_by_instructor(user_id),
        db.list_doubts(DoubtFilter::All),
        db.list_quiz_attempts(),
    )
    .map_err(|e| port_failure("load instructor stats", e))?;

    let own_videos: HashSet<Uuid> = videos.iter().map(|v| v.id).collect();
    let doubts: Vec<Doubt> = doubts
        .into_iter()
        .filter(|d| own_videos.contains(&d.video_id))
        .collect();

    let stats = instructor_stats(&videos, &doubts, &attempts);
    Ok(Json(InstructorStatsResponse {
        total_videos: stats.total_videos,
        linked_videos: stats.linked_videos,
        total_doubts: stats.total_doubts,
        pending_doubts: stats.pending_doubts,
        resolved_doubts: stats.resolved_doubts,
        quiz_attempts: stats.quiz_attempts,
        avg_quiz_score: stats.avg_quiz_score,
    }))
}
