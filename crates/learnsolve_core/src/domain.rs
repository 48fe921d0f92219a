//! crates/learnsolve_core/src/domain.rs
//!
//! Mutable records owned by the backend store. They reference the curriculum
//! tree only through its string identifiers.
//! These structs are independent of any database or serialization format.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Metadata for a video an instructor uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub domain: String,
    pub topic: String,
    pub difficulty: String,
    pub storage_path: String,
    pub duration_seconds: Option<i32>,
    /// The curriculum question this video explains, once linked.
    pub question_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to insert a `Video`; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub instructor_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub domain: String,
    pub topic: String,
    pub difficulty: String,
    pub storage_path: String,
    pub duration_seconds: Option<i32>,
}

/// Optional equality filters for listing videos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoFilter {
    pub domain: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

impl VideoFilter {
    pub fn matches(&self, video: &Video) -> bool {
        let eq = |want: &Option<String>, have: &str| want.as_deref().map_or(true, |w| w == have);
        eq(&self.domain, &video.domain)
            && eq(&self.topic, &video.topic)
            && eq(&self.difficulty, &video.difficulty)
    }
}

/// A learner's watch progress on one video. One record per (user, video).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub video_id: Uuid,
    pub progress_percent: u8,
    pub completed: bool,
    pub last_watched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A normalized progress write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub progress_percent: u8,
    pub completed: bool,
}

impl ProgressUpdate {
    /// Clamps to 100; reaching 100 marks the video completed.
    pub fn from_percent(percent: u32) -> Self {
        Self {
            progress_percent: percent.min(100) as u8,
            completed: percent >= 100,
        }
    }

    pub fn completed() -> Self {
        Self::from_percent(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoubtStatus {
    Pending,
    Resolved,
}

impl DoubtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoubtStatus::Pending => "pending",
            DoubtStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for DoubtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoubtStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DoubtStatus::Pending),
            "resolved" => Ok(DoubtStatus::Resolved),
            other => Err(format!("unknown doubt status: {}", other)),
        }
    }
}

/// A student's question about a specific video, tracked to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doubt {
    pub id: Uuid,
    pub student_id: Uuid,
    pub video_id: Uuid,
    pub doubt_text: String,
    pub ai_explanation: Option<String>,
    pub instructor_reply: Option<String>,
    pub status: DoubtStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoubt {
    pub student_id: Uuid,
    pub video_id: Uuid,
    pub doubt_text: String,
    pub ai_explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DoubtFilter {
    #[default]
    All,
    Pending,
    Resolved,
}

impl DoubtFilter {
    pub fn matches(&self, status: DoubtStatus) -> bool {
        match self {
            DoubtFilter::All => true,
            DoubtFilter::Pending => status == DoubtStatus::Pending,
            DoubtFilter::Resolved => status == DoubtStatus::Resolved,
        }
    }
}

/// One scored submission of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: String,
    pub correct: u32,
    pub total: u32,
    pub score_percent: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuizAttempt {
    pub user_id: Uuid,
    pub quiz_id: String,
    pub correct: u32,
    pub total: u32,
    pub score_percent: u32,
}
