//! services/api/src/web/router.rs
//!
//! Assembles the HTTP routes. Curriculum browsing is public; everything that
//! acts for a user sits behind the `x-user-id` middleware.

use crate::error::ApiError;
use crate::web::middleware::require_user;
use crate::web::state::AppState;
use crate::web::{assistant, curriculum, doubts, instructor, progress, quizzes, videos};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the API router with all routes and shared layers applied.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/curriculum/domains", get(curriculum::list_domains_handler))
        .route(
            "/curriculum/domains/{domain_id}",
            get(curriculum::get_domain_handler),
        )
        .route(
            "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}",
            get(curriculum::get_difficulty_handler),
        )
        .route(
            "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics",
            get(curriculum::list_topics_handler),
        )
        .route(
            "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}",
            get(curriculum::get_topic_handler),
        )
        .route(
            "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}/questions",
            get(curriculum::list_questions_handler),
        )
        .route(
            "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}/videos",
            get(curriculum::list_topic_videos_handler),
        )
        .route(
            "/curriculum/questions/{question_id}",
            get(curriculum::get_question_handler),
        )
        .route("/search", get(curriculum::search_handler))
        .route("/quizzes/{quiz_id}", get(quizzes::get_quiz_handler));

    let user_routes = Router::new()
        .route(
            "/videos",
            post(videos::create_video_handler).get(videos::list_videos_handler),
        )
        .route("/videos/{video_id}", delete(videos::delete_video_handler))
        .route("/videos/{video_id}/link", put(videos::link_video_handler))
        .route("/instructor/videos", get(videos::list_instructor_videos_handler))
        .route("/instructor/stats", get(instructor::instructor_stats_handler))
        .route("/progress", get(progress::list_progress_handler))
        .route("/progress/{video_id}", put(progress::update_progress_handler))
        .route(
            "/progress/{video_id}/complete",
            post(progress::complete_video_handler),
        )
        .route("/stats/progress", get(progress::progress_stats_handler))
        .route(
            "/doubts",
            post(doubts::create_doubt_handler).get(doubts::list_doubts_handler),
        )
        .route("/doubts/{doubt_id}/reply", post(doubts::reply_doubt_handler))
        .route("/doubts/{doubt_id}/resolve", post(doubts::resolve_doubt_handler))
        .route("/assistant/ask", post(assistant::ask_assistant_handler))
        .route("/quizzes/{quiz_id}/submit", post(quizzes::submit_quiz_handler))
        .route_layer(axum_middleware::from_fn(require_user));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS for the single configured front-end origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ApiError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid CORS origin '{}': {}", origin, e)))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-user-id")]))
}
