//! crates/learnsolve_core/src/ports.rs
//!
//! Defines the service contracts (traits) the HTTP service depends on.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! core independent of the concrete store and LLM provider.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Doubt, DoubtFilter, NewDoubt, NewQuizAttempt, NewVideo, ProgressUpdate, QuizAttempt,
    UserProgress, Video, VideoFilter,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    Invalid(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait DatabaseService: Send + Sync {
    // --- Videos ---
    async fn create_video(&self, video: NewVideo) -> PortResult<Video>;

    async fn get_video_by_id(&self, video_id: Uuid) -> PortResult<Video>;

    /// Newest first.
    async fn list_videos(&self, filter: &VideoFilter) -> PortResult<Vec<Video>>;

    /// Newest first.
    async fn list_videos_by_instructor(&self, instructor_id: Uuid) -> PortResult<Vec<Video>>;

    /// Removes the record and returns it, so the caller can clean up storage.
    async fn delete_video(&self, video_id: Uuid) -> PortResult<Video>;

    async fn link_video_to_question(&self, video_id: Uuid, question_id: &str) -> PortResult<Video>;

    // --- Progress ---
    /// Inserts or overwrites the record for (user, video).
    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        update: ProgressUpdate,
    ) -> PortResult<UserProgress>;

    /// Most recently watched first.
    async fn get_progress_for_user(&self, user_id: Uuid) -> PortResult<Vec<UserProgress>>;

    /// Ids of curriculum questions whose linked video the user has completed.
    async fn get_completed_question_ids(&self, user_id: Uuid) -> PortResult<Vec<String>>;

    // --- Doubts ---
    async fn create_doubt(&self, doubt: NewDoubt) -> PortResult<Doubt>;

    /// Newest first.
    async fn list_doubts(&self, filter: DoubtFilter) -> PortResult<Vec<Doubt>>;

    async fn reply_to_doubt(&self, doubt_id: Uuid, reply: &str) -> PortResult<Doubt>;

    async fn resolve_doubt(&self, doubt_id: Uuid) -> PortResult<Doubt>;

    // --- Quiz Attempts ---
    async fn save_quiz_attempt(&self, attempt: NewQuizAttempt) -> PortResult<QuizAttempt>;

    async fn list_quiz_attempts(&self) -> PortResult<Vec<QuizAttempt>>;
}

#[async_trait]
pub trait DoubtAssistantService: Send + Sync {
    /// Explains a learner's doubt using the given curriculum/video context.
    async fn explain(&self, question: &str, context: &str) -> PortResult<String>;
}
