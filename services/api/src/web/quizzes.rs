//! services/api/src/web/quizzes.rs
//!
//! Quiz retrieval and submission. Answer keys never leave the server before
//! a submission is scored.

use crate::web::middleware::CurrentUser;
use crate::web::rest::{port_failure, HandlerError};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use learnsolve_core::domain::NewQuizAttempt;
use learnsolve_core::quiz::{Quiz, QuizResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct QuizQuestionResponse {
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuizQuestionResponse>,
}

impl From<&Quiz> for QuizResponse {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            questions: quiz
                .questions
                .iter()
                .map(|q| QuizQuestionResponse {
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct SubmitQuizRequest {
    /// One slot per question, in order; `null` for unanswered.
    pub answers: Vec<Option<usize>>,
}

#[derive(Serialize, ToSchema)]
pub struct AnswerReviewResponse {
    pub selected: Option<usize>,
    pub correct: usize,
    pub is_correct: bool,
}

#[derive(Serialize, ToSchema)]
pub struct QuizResultResponse {
    pub attempt_id: Uuid,
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
    pub review: Vec<AnswerReviewResponse>,
}

impl QuizResultResponse {
    fn new(attempt_id: Uuid, result: QuizResult) -> Self {
        Self {
            attempt_id,
            correct: result.correct,
            total: result.total,
            percent: result.percent,
            review: result
                .review
                .into_iter()
                .map(|r| AnswerReviewResponse {
                    selected: r.selected,
                    correct: r.correct,
                    is_correct: r.is_correct,
                })
                .collect(),
        }
    }
}

fn unknown_quiz(quiz_id: &str) -> HandlerError {
    (StatusCode::NOT_FOUND, format!("Quiz {} not found", quiz_id))
}

/// Fetch a quiz without its answer key.
#[utoipa::path(
    get,
    path = "/quizzes/{quiz_id}",
    params(("quiz_id" = String, Path, description = "Quiz id")),
    responses(
        (status = 200, description = "The quiz", body = QuizResponse),
        (status = 404, description = "Unknown quiz")
    )
)]
pub async fn get_quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<String>,
) -> Result<Json<QuizResponse>, HandlerError> {
    let quiz = app_state
        .quizzes
        .find(&quiz_id)
        .ok_or_else(|| unknown_quiz(&quiz_id))?;
    Ok(Json(quiz.into()))
}

/// Score a set of answers and record the attempt.
#[utoipa::path(
    post,
    path = "/quizzes/{quiz_id}/submit",
    request_body = SubmitQuizRequest,
    params(
        ("quiz_id" = String, Path, description = "Quiz id"),
        ("x-user-id" = Uuid, Header, description = "The learner's user id.")
    ),
    responses(
        (status = 200, description = "Scored attempt", body = QuizResultResponse),
        (status = 404, description = "Unknown quiz")
    )
)]
pub async fn submit_quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(quiz_id): Path<String>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<Json<QuizResultResponse>, HandlerError> {
    let quiz = app_state
        .quizzes
        .find(&quiz_id)
        .ok_or_else(|| unknown_quiz(&quiz_id))?;
    let result = quiz.score(&req.answers);

    let attempt = app_state
        .db
        .save_quiz_attempt(NewQuizAttempt {
            user_id,
            quiz_id: quiz.id.clone(),
            correct: result.correct,
            total: result.total,
            score_percent: result.percent,
        })
        .await
        .map_err(|e| port_failure("save quiz attempt", e))?;
    info!(
        "Quiz {} attempt {} scored {}/{}",
        quiz.id, attempt.id, result.correct, result.total
    );

    Ok(Json(QuizResultResponse::new(attempt.id, result)))
}
