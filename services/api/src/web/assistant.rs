//! services/api/src/web/assistant.rs
//!
//! Free-form questions to the learning assistant, optionally anchored to a
//! curriculum question.

use crate::web::rest::HandlerError;
use crate::web::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use learnsolve_core::curriculum::{Curriculum, QuestionLocation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AskRequest {
    pub message: String,
    /// Curriculum question the learner is working on, if any.
    pub question_id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
}

/// `Domain • Difficulty • Topic: Title` for a located question.
pub fn lineage_label(loc: QuestionLocation<'_>) -> String {
    format!(
        "{} • {} • {}: {}",
        loc.domain.name, loc.difficulty.name, loc.topic.name, loc.question.title
    )
}

/// Assistant context for an optional question id. Unknown ids give an empty context.
pub fn question_context(curriculum: &Curriculum, question_id: Option<&str>) -> String {
    question_id
        .and_then(|id| curriculum.locate_question(id))
        .map(|loc| format!("PROBLEM: {}", lineage_label(loc)))
        .unwrap_or_default()
}

/// Ask the assistant about the current problem.
#[utoipa::path(
    post,
    path = "/assistant/ask",
    request_body = AskRequest,
    params(("x-user-id" = Uuid, Header, description = "The learner's user id.")),
    responses(
        (status = 200, description = "The assistant's answer", body = AskResponse),
        (status = 400, description = "Empty message"),
        (status = 502, description = "The assistant is unavailable")
    )
)]
pub async fn ask_assistant_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Message is required".to_string()));
    }

    let context = question_context(&app_state.curriculum, req.question_id.as_deref());
    debug!("Assistant question with {} bytes of context", context.len());

    let answer = app_state
        .assistant
        .explain(message, &context)
        .await
        .map_err(|e| {
            error!("Assistant request failed: {:?}", e);
            (
                StatusCode::BAD_GATEWAY,
                "The assistant is unavailable right now".to_string(),
            )
        })?;

    Ok(Json(AskResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_question_builds_lineage_context() {
        let curriculum = Curriculum::builtin();
        let context = question_context(&curriculum, Some("dsa-adv-seg-1"));
        assert!(context.starts_with("PROBLEM: "));
        assert!(context.contains(" • Advanced • "));
    }

    #[test]
    fn unknown_or_missing_question_gives_empty_context() {
        let curriculum = Curriculum::builtin();
        assert_eq!(question_context(&curriculum, Some("nope-1")), "");
        assert_eq!(question_context(&curriculum, None), "");
    }
}
