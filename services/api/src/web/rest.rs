//! services/api/src/web/rest.rs
//!
//! The master definition for the OpenAPI specification and the error
//! mapping shared by the REST handlers.

use crate::web::{assistant, curriculum, doubts, instructor, progress, quizzes, videos};
use axum::http::StatusCode;
use learnsolve_core::ports::PortError;
use tracing::error;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        curriculum::list_domains_handler,
        curriculum::get_domain_handler,
        curriculum::get_difficulty_handler,
        curriculum::list_topics_handler,
        curriculum::get_topic_handler,
        curriculum::list_questions_handler,
        curriculum::list_topic_videos_handler,
        curriculum::get_question_handler,
        curriculum::search_handler,
        videos::create_video_handler,
        videos::list_videos_handler,
        videos::list_instructor_videos_handler,
        videos::delete_video_handler,
        videos::link_video_handler,
        progress::update_progress_handler,
        progress::complete_video_handler,
        progress::list_progress_handler,
        progress::progress_stats_handler,
        doubts::create_doubt_handler,
        doubts::list_doubts_handler,
        doubts::reply_doubt_handler,
        doubts::resolve_doubt_handler,
        assistant::ask_assistant_handler,
        quizzes::get_quiz_handler,
        quizzes::submit_quiz_handler,
        instructor::instructor_stats_handler,
    ),
    components(
        schemas(
            curriculum::DomainSummaryResponse,
            curriculum::DomainResponse,
            curriculum::TopicResponse,
            curriculum::QuestionDetailResponse,
            curriculum::VideoSourceResponse,
            curriculum::SearchHitResponse,
            videos::VideoResponse,
            videos::CreateVideoRequest,
            videos::LinkVideoRequest,
            progress::ProgressResponse,
            progress::ProgressStatsResponse,
            progress::UpdateProgressRequest,
            doubts::DoubtResponse,
            doubts::CreateDoubtRequest,
            doubts::ReplyDoubtRequest,
            assistant::AskRequest,
            assistant::AskResponse,
            quizzes::QuizResponse,
            quizzes::SubmitQuizRequest,
            quizzes::QuizResultResponse,
            instructor::InstructorStatsResponse,
        )
    ),
    tags(
        (name = "LearnSolve API", description = "Curriculum browsing, instructor videos, progress, doubts and quizzes.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Handler Errors
//=========================================================================================

/// The error half of every handler's result: a status and a plain-text message.
pub type HandlerError = (StatusCode, String);

/// Logs a port failure and maps it to the status a client should see.
pub(crate) fn port_failure(context: &str, e: PortError) -> HandlerError {
    match e {
        PortError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
        PortError::Invalid(reason) => (StatusCode::BAD_REQUEST, reason),
        PortError::Unexpected(_) => {
            error!("Failed to {}: {:?}", context, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to {}", context),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_errors_map_to_statuses() {
        let (status, _) = port_failure("load video", PortError::NotFound("video".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, message) = port_failure("link video", PortError::Invalid("bad id".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "bad id");

        let (status, message) = port_failure("list videos", PortError::Unexpected("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Failed to list videos");
    }

    #[test]
    fn openapi_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/curriculum/domains",
            "/curriculum/questions/{question_id}",
            "/search",
            "/videos/{video_id}/link",
            "/stats/progress",
            "/doubts/{doubt_id}/resolve",
            "/assistant/ask",
            "/quizzes/{quiz_id}/submit",
            "/instructor/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
