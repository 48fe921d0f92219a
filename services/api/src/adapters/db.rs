//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `DatabaseService` port from the core crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learnsolve_core::domain::{
    Doubt, DoubtFilter, DoubtStatus, NewDoubt, NewQuizAttempt, NewVideo, ProgressUpdate,
    QuizAttempt, UserProgress, Video, VideoFilter,
};
use learnsolve_core::ports::{DatabaseService, PortError, PortResult};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const VIDEO_COLUMNS: &str = "id, instructor_id, title, description, domain, topic, difficulty, \
     storage_path, duration_seconds, question_id, created_at, updated_at";
const PROGRESS_COLUMNS: &str =
    "id, user_id, video_id, progress_percent, completed, last_watched_at, created_at, updated_at";
const DOUBT_COLUMNS: &str = "id, student_id, video_id, doubt_text, ai_explanation, \
     instructor_reply, status, created_at, resolved_at";
const QUIZ_ATTEMPT_COLUMNS: &str = "id, user_id, quiz_id, correct, total, score_percent, created_at";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `DatabaseService` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

/// Maps a failed write that references another row. A foreign key violation
/// means the referenced row does not exist.
fn missing_reference(e: sqlx::Error, what: String) -> PortError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => PortError::NotFound(what),
        _ => unexpected(e),
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct VideoRecord {
    id: Uuid,
    instructor_id: Uuid,
    title: String,
    description: Option<String>,
    domain: String,
    topic: String,
    difficulty: String,
    storage_path: String,
    duration_seconds: Option<i32>,
    question_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}
impl VideoRecord {
    fn to_domain(self) -> Video {
        Video {
            id: self.id,
            instructor_id: self.instructor_id,
            title: self.title,
            description: self.description,
            domain: self.domain,
            topic: self.topic,
            difficulty: self.difficulty,
            storage_path: self.storage_path,
            duration_seconds: self.duration_seconds,
            question_id: self.question_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(FromRow)]
struct ProgressRecord {
    id: Uuid,
    user_id: Uuid,
    video_id: Uuid,
    progress_percent: i32,
    completed: bool,
    last_watched_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}
impl ProgressRecord {
    fn to_domain(self) -> UserProgress {
        UserProgress {
            id: self.id,
            user_id: self.user_id,
            video_id: self.video_id,
            progress_percent: self.progress_percent.clamp(0, 100) as u8,
            completed: self.completed,
            last_watched_at: self.last_watched_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(FromRow)]
struct DoubtRecord {
    id: Uuid,
    student_id: Uuid,
    video_id: Uuid,
    doubt_text: String,
    ai_explanation: Option<String>,
    instructor_reply: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
}
impl DoubtRecord {
    fn to_domain(self) -> PortResult<Doubt> {
        let status = self.status.parse::<DoubtStatus>().map_err(PortError::Unexpected)?;
        Ok(Doubt {
            id: self.id,
            student_id: self.student_id,
            video_id: self.video_id,
            doubt_text: self.doubt_text,
            ai_explanation: self.ai_explanation,
            instructor_reply: self.instructor_reply,
            status,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        })
    }
}

#[derive(FromRow)]
struct QuizAttemptRecord {
    id: Uuid,
    user_id: Uuid,
    quiz_id: String,
    correct: i32,
    total: i32,
    score_percent: i32,
    created_at: DateTime<Utc>,
}
impl QuizAttemptRecord {
    fn to_domain(self) -> QuizAttempt {
        QuizAttempt {
            id: self.id,
            user_id: self.user_id,
            quiz_id: self.quiz_id,
            correct: self.correct.max(0) as u32,
            total: self.total.max(0) as u32,
            score_percent: self.score_percent.max(0) as u32,
            created_at: self.created_at,
        }
    }
}

//=========================================================================================
// `DatabaseService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DatabaseService for DbAdapter {
    async fn create_video(&self, video: NewVideo) -> PortResult<Video> {
        let sql = format!(
            "INSERT INTO videos (id, instructor_id, title, description, domain, topic, difficulty, storage_path, duration_seconds) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            VIDEO_COLUMNS
        );
        let record = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(video.instructor_id)
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.domain)
            .bind(&video.topic)
            .bind(&video.difficulty)
            .bind(&video.storage_path)
            .bind(video.duration_seconds)
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(record.to_domain())
    }

    async fn get_video_by_id(&self, video_id: Uuid) -> PortResult<Video> {
        let sql = format!("SELECT {} FROM videos WHERE id = $1", VIDEO_COLUMNS);
        let record = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(video_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => PortError::NotFound(format!("Video {} not found", video_id)),
                _ => unexpected(e),
            })?;
        Ok(record.to_domain())
    }

    async fn list_videos(&self, filter: &VideoFilter) -> PortResult<Vec<Video>> {
        let sql = format!(
            "SELECT {} FROM videos \
             WHERE ($1::text IS NULL OR domain = $1) \
               AND ($2::text IS NULL OR topic = $2) \
               AND ($3::text IS NULL OR difficulty = $3) \
             ORDER BY created_at DESC",
            VIDEO_COLUMNS
        );
        let records = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(&filter.domain)
            .bind(&filter.topic)
            .bind(&filter.difficulty)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn list_videos_by_instructor(&self, instructor_id: Uuid) -> PortResult<Vec<Video>> {
        let sql = format!(
            "SELECT {} FROM videos WHERE instructor_id = $1 ORDER BY created_at DESC",
            VIDEO_COLUMNS
        );
        let records = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(instructor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn delete_video(&self, video_id: Uuid) -> PortResult<Video> {
        let sql = format!("DELETE FROM videos WHERE id = $1 RETURNING {}", VIDEO_COLUMNS);
        let record = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(video_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| PortError::NotFound(format!("Video {} not found", video_id)))?;
        Ok(record.to_domain())
    }

    async fn link_video_to_question(&self, video_id: Uuid, question_id: &str) -> PortResult<Video> {
        let sql = format!(
            "UPDATE videos SET question_id = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            VIDEO_COLUMNS
        );
        let record = sqlx::query_as::<_, VideoRecord>(&sql)
            .bind(video_id)
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| PortError::NotFound(format!("Video {} not found", video_id)))?;
        Ok(record.to_domain())
    }

    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        update: ProgressUpdate,
    ) -> PortResult<UserProgress> {
        let sql = format!(
            "INSERT INTO user_progress (id, user_id, video_id, progress_percent, completed, last_watched_at) \
             VALUES ($1, $2, $3, $4, $5, NOW()) \
             ON CONFLICT (user_id, video_id) DO UPDATE SET \
               progress_percent = EXCLUDED.progress_percent, \
               completed = EXCLUDED.completed, \
               last_watched_at = NOW(), \
               updated_at = NOW() \
             RETURNING {}",
            PROGRESS_COLUMNS
        );
        let record = sqlx::query_as::<_, ProgressRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(video_id)
            .bind(i32::from(update.progress_percent))
            .bind(update.completed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| missing_reference(e, format!("Video {} not found", video_id)))?;
        Ok(record.to_domain())
    }

    async fn get_progress_for_user(&self, user_id: Uuid) -> PortResult<Vec<UserProgress>> {
        let sql = format!(
            "SELECT {} FROM user_progress WHERE user_id = $1 ORDER BY last_watched_at DESC",
            PROGRESS_COLUMNS
        );
        let records = sqlx::query_as::<_, ProgressRecord>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_completed_question_ids(&self, user_id: Uuid) -> PortResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT v.question_id FROM user_progress p \
             JOIN videos v ON v.id = p.video_id \
             WHERE p.user_id = $1 AND p.completed AND v.question_id IS NOT NULL",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)
    }

    async fn create_doubt(&self, doubt: NewDoubt) -> PortResult<Doubt> {
        let sql = format!(
            "INSERT INTO doubts (id, student_id, video_id, doubt_text, ai_explanation) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            DOUBT_COLUMNS
        );
        let record = sqlx::query_as::<_, DoubtRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(doubt.student_id)
            .bind(doubt.video_id)
            .bind(&doubt.doubt_text)
            .bind(&doubt.ai_explanation)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| missing_reference(e, format!("Video {} not found", doubt.video_id)))?;
        record.to_domain()
    }

    async fn list_doubts(&self, filter: DoubtFilter) -> PortResult<Vec<Doubt>> {
        let status = match filter {
            DoubtFilter::All => None,
            DoubtFilter::Pending => Some(DoubtStatus::Pending.as_str()),
            DoubtFilter::Resolved => Some(DoubtStatus::Resolved.as_str()),
        };
        let sql = format!(
            "SELECT {} FROM doubts WHERE ($1::text IS NULL OR status = $1) ORDER BY created_at DESC",
            DOUBT_COLUMNS
        );
        let records = sqlx::query_as::<_, DoubtRecord>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn reply_to_doubt(&self, doubt_id: Uuid, reply: &str) -> PortResult<Doubt> {
        let sql = format!(
            "UPDATE doubts SET instructor_reply = $2 WHERE id = $1 RETURNING {}",
            DOUBT_COLUMNS
        );
        sqlx::query_as::<_, DoubtRecord>(&sql)
            .bind(doubt_id)
            .bind(reply)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| PortError::NotFound(format!("Doubt {} not found", doubt_id)))?
            .to_domain()
    }

    async fn resolve_doubt(&self, doubt_id: Uuid) -> PortResult<Doubt> {
        let sql = format!(
            "UPDATE doubts SET status = 'resolved', resolved_at = COALESCE(resolved_at, NOW()) \
             WHERE id = $1 RETURNING {}",
            DOUBT_COLUMNS
        );
        sqlx::query_as::<_, DoubtRecord>(&sql)
            .bind(doubt_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| PortError::NotFound(format!("Doubt {} not found", doubt_id)))?
            .to_domain()
    }

    async fn save_quiz_attempt(&self, attempt: NewQuizAttempt) -> PortResult<QuizAttempt> {
        let sql = format!(
            "INSERT INTO quiz_attempts (id, user_id, quiz_id, correct, total, score_percent) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            QUIZ_ATTEMPT_COLUMNS
        );
        let record = sqlx::query_as::<_, QuizAttemptRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(attempt.user_id)
            .bind(&attempt.quiz_id)
            .bind(attempt.correct as i32)
            .bind(attempt.total as i32)
            .bind(attempt.score_percent as i32)
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(record.to_domain())
    }

    async fn list_quiz_attempts(&self) -> PortResult<Vec<QuizAttempt>> {
        let sql = format!(
            "SELECT {} FROM quiz_attempts ORDER BY created_at DESC",
            QUIZ_ATTEMPT_COLUMNS
        );
        let records = sqlx::query_as::<_, QuizAttemptRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }
}
