//! services/api/src/web/doubts.rs
//!
//! Student doubts on videos. A new doubt is sent to the assistant once for
//! an immediate explanation; instructors reply to and resolve doubts later.

use crate::web::assistant::question_context;
use crate::web::middleware::CurrentUser;
use crate::web::rest::{port_failure, HandlerError};
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use chrono::{DateTime, Utc};
use learnsolve_core::domain::{Doubt, DoubtFilter, NewDoubt, Video};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct DoubtResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub video_id: Uuid,
    pub doubt_text: String,
    pub ai_explanation: Option<String>,
    pub instructor_reply: Option<String>,
    /// `pending` or `resolved`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<Doubt> for DoubtResponse {
    fn from(d: Doubt) -> Self {
        Self {
            id: d.id,
            student_id: d.student_id,
            video_id: d.video_id,
            doubt_text: d.doubt_text,
            ai_explanation: d.ai_explanation,
            instructor_reply: d.instructor_reply,
            status: d.status.as_str().to_string(),
            created_at: d.created_at,
            resolved_at: d.resolved_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateDoubtRequest {
    pub video_id: Uuid,
    pub doubt_text: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ReplyDoubtRequest {
    pub reply: String,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct DoubtQuery {
    /// `all` (default), `pending` or `resolved`.
    pub status: Option<String>,
}

fn parse_filter(status: Option<&str>) -> Result<DoubtFilter, HandlerError> {
    match status.map(str::trim) {
        None | Some("") | Some("all") => Ok(DoubtFilter::All),
        Some("pending") => Ok(DoubtFilter::Pending),
        Some("resolved") => Ok(DoubtFilter::Resolved),
        Some(other) => Err((
            StatusCode::BAD_REQUEST,
            format!("Unknown doubt status filter '{}'", other),
        )),
    }
}

/// The assistant context for a doubt: the linked problem, then the video.
fn doubt_context(app_state: &AppState, video: &Video) -> String {
    let mut parts = Vec::new();
    let problem = question_context(&app_state.curriculum, video.question_id.as_deref());
    if !problem.is_empty() {
        parts.push(problem);
    }
    match video.description.as_deref() {
        Some(description) => parts.push(format!("VIDEO: {} - {}", video.title, description)),
        None => parts.push(format!("VIDEO: {}", video.title)),
    }
    parts.join("\n")
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Ask a question about a video.
#[utoipa::path(
    post,
    path = "/doubts",
    request_body = CreateDoubtRequest,
    params(("x-user-id" = Uuid, Header, description = "The student's user id.")),
    responses(
        (status = 201, description = "Doubt recorded", body = DoubtResponse),
        (status = 400, description = "Empty doubt text"),
        (status = 404, description = "Unknown video")
    )
)]
pub async fn create_doubt_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(req): Json<CreateDoubtRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let doubt_text = req.doubt_text.trim();
    if doubt_text.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Doubt text is required".to_string()));
    }

    let video = app_state
        .db
        .get_video_by_id(req.video_id)
        .await
        .map_err(|e| port_failure("load video for doubt", e))?;

    let context = doubt_context(&app_state, &video);
    let ai_explanation = match app_state.assistant.explain(doubt_text, &context).await {
        Ok(answer) => Some(answer),
        Err(e) => {
            warn!("Assistant failed for doubt on video {}: {:?}", video.id, e);
            None
        }
    };

    let doubt = app_state
        .db
        .create_doubt(NewDoubt {
            student_id: user_id,
            video_id: video.id,
            doubt_text: doubt_text.to_string(),
            ai_explanation,
        })
        .await
        .map_err(|e| port_failure("create doubt", e))?;
    info!("Doubt {} recorded on video {}", doubt.id, doubt.video_id);

    Ok((StatusCode::CREATED, Json(DoubtResponse::from(doubt))))
}

/// List doubts, newest first.
#[utoipa::path(
    get,
    path = "/doubts",
    params(("x-user-id" = Uuid, Header, description = "The caller's user id."), DoubtQuery),
    responses(
        (status = 200, description = "Matching doubts", body = Vec<DoubtResponse>),
        (status = 400, description = "Unknown status filter")
    )
)]
pub async fn list_doubts_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<DoubtQuery>,
) -> Result<Json<Vec<DoubtResponse>>, HandlerError> {
    let filter = parse_filter(query.status.as_deref())?;
    let doubts = app_state
        .db
        .list_doubts(filter)
        .await
        .map_err(|e| port_failure("list doubts", e))?;
    Ok(Json(doubts.into_iter().map(DoubtResponse::from).collect()))
}

/// Attach an instructor reply to a doubt.
#[utoipa::path(
    post,
    path = "/doubts/{doubt_id}/reply",
    request_body = ReplyDoubtRequest,
    params(
        ("doubt_id" = Uuid, Path, description = "Doubt id"),
        ("x-user-id" = Uuid, Header, description = "The instructor's user id.")
    ),
    responses(
        (status = 200, description = "Reply saved", body = DoubtResponse),
        (status = 400, description = "Empty reply"),
        (status = 404, description = "Unknown doubt")
    )
)]
pub async fn reply_doubt_handler(
    State(app_state): State<Arc<AppState>>,
    Path(doubt_id): Path<Uuid>,
    Json(req): Json<ReplyDoubtRequest>,
) -> Result<Json<DoubtResponse>, HandlerError> {
    let reply = req.reply.trim();
    if reply.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Reply is required".to_string()));
    }
    let doubt = app_state
        .db
        .reply_to_doubt(doubt_id, reply)
        .await
        .map_err(|e| port_failure("reply to doubt", e))?;
    Ok(Json(doubt.into()))
}

/// Mark a doubt resolved.
#[utoipa::path(
    post,
    path = "/doubts/{doubt_id}/resolve",
    params(
        ("doubt_id" = Uuid, Path, description = "Doubt id"),
        ("x-user-id" = Uuid, Header, description = "The instructor's user id.")
    ),
    responses(
        (status = 200, description = "Doubt resolved", body = DoubtResponse),
        (status = 404, description = "Unknown doubt")
    )
)]
pub async fn resolve_doubt_handler(
    State(app_state): State<Arc<AppState>>,
    Path(doubt_id): Path<Uuid>,
) -> Result<Json<DoubtResponse>, HandlerError> {
    let doubt = app_state
        .db
        .resolve_doubt(doubt_id)
        .await
        .map_err(|e| port_failure("resolve doubt", e))?;
    info!("Doubt {} resolved", doubt.id);
    Ok(Json(doubt.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parsing() {
        assert_eq!(parse_filter(None).ok(), Some(DoubtFilter::All));
        assert_eq!(parse_filter(Some("all")).ok(), Some(DoubtFilter::All));
        assert_eq!(parse_filter(Some("pending")).ok(), Some(DoubtFilter::Pending));
        assert_eq!(parse_filter(Some("resolved")).ok(), Some(DoubtFilter::Resolved));

        let (status, _) = parse_filter(Some("open")).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
