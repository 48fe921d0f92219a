//! services/api/src/web/videos.rs
//!
//! Instructor video records: registering uploads, listing, deleting and
//! linking a video to a curriculum question.

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
use learnsolve_core::domain::{NewVideo, Video, VideoFilter};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("literal pattern is valid"));

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub domain: String,
    pub topic: String,
    pub difficulty: String,
    pub storage_path: String,
    /// Public URL the video can be streamed from.
    pub url: String,
    pub duration_seconds: Option<i32>,
    pub question_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoResponse {
    pub fn from_video(video: Video, storage_public_url: &str) -> Self {
        Self {
            url: format!("{}/{}", storage_public_url, video.storage_path),
            id: video.id,
            instructor_id: video.instructor_id,
            title: video.title,
            description: video.description,
            domain: video.domain,
            topic: video.topic,
            difficulty: video.difficulty,
            storage_path: video.storage_path,
            duration_seconds: video.duration_seconds,
            question_id: video.question_id,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

/// Metadata for a file the client already uploaded to object storage.
#[derive(Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    pub title: String,
    pub description: Option<String>,
    pub domain: String,
    pub difficulty: String,
    pub topic: String,
    /// Original file name; only its extension is kept.
    pub file_name: String,
    pub duration_seconds: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct LinkVideoRequest {
    pub question_id: String,
}

#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct VideoQuery {
    pub domain: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

/// Object key for an upload: `{domain}/{topic}/{millis}_{slug}.{ext}`.
///
/// The slug is the title lowercased with every non-alphanumeric character
/// replaced by `_`. The extension is whatever follows the last `.` of the
/// file name, or the whole name when it has none.
pub fn build_storage_path(domain: &str, topic: &str, title: &str, file_name: &str, millis: i64) -> String {
    let extension = file_name.rsplit('.').next().unwrap_or(file_name);
    let slug = NON_ALPHANUMERIC.replace_all(title, "_").to_lowercase();
    format!("{}/{}/{}_{}.{}", domain, topic, millis, slug, extension)
}

fn ensure_owner(video: &Video, user_id: Uuid) -> Result<(), HandlerError> {
    if video.instructor_id != user_id {
        return Err((
            StatusCode::FORBIDDEN,
            "Only the uploading instructor can change this video".to_string(),
        ));
    }
    Ok(())
}

fn bad_request(message: impl Into<String>) -> HandlerError {
    (StatusCode::BAD_REQUEST, message.into())
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Register an uploaded video against a curriculum topic.
#[utoipa::path(
    post,
    path = "/videos",
    request_body = CreateVideoRequest,
    params(("x-user-id" = Uuid, Header, description = "The instructor's user id.")),
    responses(
        (status = 201, description = "Video registered", body = VideoResponse),
        (status = 400, description = "Missing title or unknown curriculum topic"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_video_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(req): Json<CreateVideoRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(bad_request("Video title is required"));
    }
    if app_state
        .curriculum
        .find_topic(&req.domain, &req.difficulty, &req.topic)
        .is_none()
    {
        return Err(bad_request(format!(
            "Unknown curriculum topic {}/{}/{}",
            req.domain, req.difficulty, req.topic
        )));
    }

    let storage_path = build_storage_path(
        &req.domain,
        &req.topic,
        title,
        &req.file_name,
        Utc::now().timestamp_millis(),
    );
    let new_video = NewVideo {
        instructor_id: user_id,
        title: title.to_string(),
        description: req.description.filter(|d| !d.trim().is_empty()),
        domain: req.domain,
        topic: req.topic,
        difficulty: req.difficulty,
        storage_path,
        duration_seconds: req.duration_seconds,
    };

    let video = app_state
        .db
        .create_video(new_video)
        .await
        .map_err(|e| port_failure("create video", e))?;
    info!("Video {} registered at {}", video.id, video.storage_path);

    Ok((
        StatusCode::CREATED,
        Json(VideoResponse::from_video(video, &app_state.config.storage_public_url)),
    ))
}

/// List videos, newest first, optionally filtered by curriculum keys.
#[utoipa::path(
    get,
    path = "/videos",
    params(("x-user-id" = Uuid, Header, description = "The caller's user id."), VideoQuery),
    responses(
        (status = 200, description = "Matching videos", body = Vec<VideoResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_videos_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<VideoQuery>,
) -> Result<Json<Vec<VideoResponse>>, HandlerError> {
    let filter = VideoFilter {
        domain: query.domain,
        topic: query.topic,
        difficulty: query.difficulty,
    };
    let videos = app_state
        .db
        .list_videos(&filter)
        .await
        .map_err(|e| port_failure("list videos", e))?;

    let base_url = &app_state.config.storage_public_url;
    Ok(Json(
        videos
            .into_iter()
            .map(|v| VideoResponse::from_video(v, base_url))
            .collect(),
    ))
}

/// List the calling instructor's own videos, newest first.
#[utoipa::path(
    get,
    path = "/instructor/videos",
    params(("x-user-id" = Uuid, Header, description = "The instructor's user id.")),
    responses(
        (status = 200, description = "The instructor's videos", body = Vec<VideoResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_instructor_videos_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<Vec<VideoResponse>>, HandlerError> {
    let videos = app_state
        .db
        .list_videos_by_instructor(user_id)
        .await
        .map_err(|e| port_failure("list instructor videos", e))?;

    let base_url = &app_state.config.storage_public_url;
    Ok(Json(
        videos
            .into_iter()
            .map(|v| VideoResponse::from_video(v, base_url))
            .collect(),
    ))
}

/// Delete one of the caller's videos.
#[utoipa::path(
    delete,
    path = "/videos/{video_id}",
    params(
        ("video_id" = Uuid, Path, description = "Video id"),
        ("x-user-id" = Uuid, Header, description = "The instructor's user id.")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "The video belongs to another instructor"),
        (status = 404, description = "Unknown video")
    )
)]
pub async fn delete_video_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    let video = app_state
        .db
        .get_video_by_id(video_id)
        .await
        .map_err(|e| port_failure("load video", e))?;
    ensure_owner(&video, user_id)?;

    let deleted = app_state
        .db
        .delete_video(video_id)
        .await
        .map_err(|e| port_failure("delete video", e))?;
    info!("Video {} deleted; storage object {} is orphaned", deleted.id, deleted.storage_path);

    Ok(StatusCode::NO_CONTENT)
}

/// Link a video to a question of the topic it was uploaded under.
#[utoipa::path(
    put,
    path = "/videos/{video_id}/link",
    request_body = LinkVideoRequest,
    params(
        ("video_id" = Uuid, Path, description = "Video id"),
        ("x-user-id" = Uuid, Header, description = "The instructor's user id.")
    ),
    responses(
        (status = 200, description = "Video linked", body = VideoResponse),
        (status = 400, description = "The question is not part of the video's topic"),
        (status = 403, description = "The video belongs to another instructor"),
        (status = 404, description = "Unknown video")
    )
)]
pub async fn link_video_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
    Json(req): Json<LinkVideoRequest>,
) -> Result<Json<VideoResponse>, HandlerError> {
    let video = app_state
        .db
        .get_video_by_id(video_id)
        .await
        .map_err(|e| port_failure("load video", e))?;
    ensure_owner(&video, user_id)?;

    if app_state
        .curriculum
        .find_question(&video.domain, &video.difficulty, &video.topic, &req.question_id)
        .is_none()
    {
        return Err(bad_request(format!(
            "Question {} is not part of {}/{}/{}",
            req.question_id, video.domain, video.difficulty, video.topic
        )));
    }

    let linked = app_state
        .db
        .link_video_to_question(video_id, &req.question_id)
        .await
        .map_err(|e| port_failure("link video", e))?;
    info!("Video {} linked to question {}", linked.id, req.question_id);

    Ok(Json(VideoResponse::from_video(
        linked,
        &app_state.config.storage_public_url,
    )))
}
