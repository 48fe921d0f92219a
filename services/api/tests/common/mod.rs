//! In-memory port implementations and request helpers for router tests.

#![allow(dead_code)]

use api_lib::config::Config;
use api_lib::web::{build_router, state::AppState};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use learnsolve_core::curriculum::Curriculum;
use learnsolve_core::domain::{
    Doubt, DoubtFilter, DoubtStatus, NewDoubt, NewQuizAttempt, NewVideo, ProgressUpdate,
    QuizAttempt, UserProgress, Video, VideoFilter,
};
use learnsolve_core::ports::{DatabaseService, DoubtAssistantService, PortError, PortResult};
use learnsolve_core::quiz::QuizBank;
use learnsolve_core::sync::{apply_change, Change};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

pub const STORAGE_URL: &str = "http://storage.test/videos";

#[derive(Default)]
struct Store {
    videos: Vec<Video>,
    progress: Vec<UserProgress>,
    doubts: Vec<Doubt>,
    attempts: Vec<QuizAttempt>,
}

/// Newest-first collections behind a mutex, mirroring the SQL adapter's ordering.
#[derive(Default)]
pub struct InMemoryDb {
    store: Mutex<Store>,
    /// Makes completed-question reads fail, as an unreachable store would.
    pub completions_offline: AtomicBool,
}

impl InMemoryDb {
    fn with_store<R>(&self, f: impl FnOnce(&mut Store) -> R) -> PortResult<R> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(f(&mut store))
    }
}

fn missing(what: &str, id: Uuid) -> PortError {
    PortError::NotFound(format!("{} {}", what, id))
}

#[async_trait]
impl DatabaseService for InMemoryDb {
    async fn create_video(&self, video: NewVideo) -> PortResult<Video> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            instructor_id: video.instructor_id,
            title: video.title,
            description: video.description,
            domain: video.domain,
            topic: video.topic,
            difficulty: video.difficulty,
            storage_path: video.storage_path,
            duration_seconds: video.duration_seconds,
            question_id: None,
            created_at: now,
            updated_at: now,
        };
        self.with_store(|s| apply_change(&mut s.videos, Change::Inserted(video.clone())))?;
        Ok(video)
    }

    async fn get_video_by_id(&self, video_id: Uuid) -> PortResult<Video> {
        self.with_store(|s| s.videos.iter().find(|v| v.id == video_id).cloned())?
            .ok_or_else(|| missing("video", video_id))
    }

    async fn list_videos(&self, filter: &VideoFilter) -> PortResult<Vec<Video>> {
        self.with_store(|s| s.videos.iter().filter(|v| filter.matches(v)).cloned().collect())
    }

    async fn list_videos_by_instructor(&self, instructor_id: Uuid) -> PortResult<Vec<Video>> {
        self.with_store(|s| {
            s.videos
                .iter()
                .filter(|v| v.instructor_id == instructor_id)
                .cloned()
                .collect()
        })
    }

    async fn delete_video(&self, video_id: Uuid) -> PortResult<Video> {
        let video = self.get_video_by_id(video_id).await?;
        self.with_store(|s| {
            apply_change(&mut s.videos, Change::Deleted(video_id));
            s.progress.retain(|p| p.video_id != video_id);
            s.doubts.retain(|d| d.video_id != video_id);
        })?;
        Ok(video)
    }

    async fn link_video_to_question(&self, video_id: Uuid, question_id: &str) -> PortResult<Video> {
        let mut video = self.get_video_by_id(video_id).await?;
        video.question_id = Some(question_id.to_string());
        video.updated_at = Utc::now();
        self.with_store(|s| apply_change(&mut s.videos, Change::Updated(video.clone())))?;
        Ok(video)
    }

    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        update: ProgressUpdate,
    ) -> PortResult<UserProgress> {
        self.get_video_by_id(video_id).await?;
        self.with_store(|s| {
            let now = Utc::now();
            let existing = s
                .progress
                .iter()
                .position(|p| p.user_id == user_id && p.video_id == video_id)
                .map(|i| s.progress.remove(i));
            let record = UserProgress {
                id: existing.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
                user_id,
                video_id,
                progress_percent: update.progress_percent,
                completed: update.completed,
                last_watched_at: now,
                created_at: existing.as_ref().map_or(now, |p| p.created_at),
                updated_at: now,
            };
            apply_change(&mut s.progress, Change::Inserted(record.clone()));
            record
        })
    }

    async fn get_progress_for_user(&self, user_id: Uuid) -> PortResult<Vec<UserProgress>> {
        self.with_store(|s| s.progress.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }

    async fn get_completed_question_ids(&self, user_id: Uuid) -> PortResult<Vec<String>> {
        if self.completions_offline.load(Ordering::SeqCst) {
            return Err(PortError::Unexpected("store unreachable".to_string()));
        }
        self.with_store(|s| {
            s.progress
                .iter()
                .filter(|p| p.user_id == user_id && p.completed)
                .filter_map(|p| s.videos.iter().find(|v| v.id == p.video_id))
                .filter_map(|v| v.question_id.clone())
                .collect()
        })
    }

    async fn create_doubt(&self, doubt: NewDoubt) -> PortResult<Doubt> {
        self.get_video_by_id(doubt.video_id).await?;
        let doubt = Doubt {
            id: Uuid::new_v4(),
            student_id: doubt.student_id,
            video_id: doubt.video_id,
            doubt_text: doubt.doubt_text,
            ai_explanation: doubt.ai_explanation,
            instructor_reply: None,
            status: DoubtStatus::Pending,
            created_at: Utc::now(),
            resolved_at: None,
        };
        self.with_store(|s| apply_change(&mut s.doubts, Change::Inserted(doubt.clone())))?;
        Ok(doubt)
    }

    async fn list_doubts(&self, filter: DoubtFilter) -> PortResult<Vec<Doubt>> {
        self.with_store(|s| s.doubts.iter().filter(|d| filter.matches(d.status)).cloned().collect())
    }

    async fn reply_to_doubt(&self, doubt_id: Uuid, reply: &str) -> PortResult<Doubt> {
        self.update_doubt(doubt_id, |d| d.instructor_reply = Some(reply.to_string()))
    }

    async fn resolve_doubt(&self, doubt_id: Uuid) -> PortResult<Doubt> {
        self.update_doubt(doubt_id, |d| {
            d.status = DoubtStatus::Resolved;
            d.resolved_at = Some(Utc::now());
        })
    }

    async fn save_quiz_attempt(&self, attempt: NewQuizAttempt) -> PortResult<QuizAttempt> {
        let attempt = QuizAttempt {
            id: Uuid::new_v4(),
            user_id: attempt.user_id,
            quiz_id: attempt.quiz_id,
            correct: attempt.correct,
            total: attempt.total,
            score_percent: attempt.score_percent,
            created_at: Utc::now(),
        };
        self.with_store(|s| s.attempts.insert(0, attempt.clone()))?;
        Ok(attempt)
    }

    async fn list_quiz_attempts(&self) -> PortResult<Vec<QuizAttempt>> {
        self.with_store(|s| s.attempts.clone())
    }
}

impl InMemoryDb {
    fn update_doubt(&self, doubt_id: Uuid, f: impl FnOnce(&mut Doubt)) -> PortResult<Doubt> {
        self.with_store(|s| {
            s.doubts.iter_mut().find(|d| d.id == doubt_id).map(|d| {
                f(d);
                d.clone()
            })
        })?
        .ok_or_else(|| missing("doubt", doubt_id))
    }
}

/// Echoes its inputs, or fails every call when `failing` is set.
#[derive(Default)]
pub struct FakeAssistant {
    pub failing: bool,
    pub last_context: Mutex<Option<String>>,
}

#[async_trait]
impl DoubtAssistantService for FakeAssistant {
    async fn explain(&self, question: &str, context: &str) -> PortResult<String> {
        if let Ok(mut last) = self.last_context.lock() {
            *last = Some(context.to_string());
        }
        if self.failing {
            return Err(PortError::Unexpected("assistant offline".to_string()));
        }
        Ok(format!("explanation for: {}", question))
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDb>,
    pub assistant: Arc<FakeAssistant>,
}

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".parse().expect("valid socket address"),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        log_level: tracing::Level::INFO,
        cors_origin: "http://localhost:5173".to_string(),
        storage_public_url: STORAGE_URL.to_string(),
        openai_api_key: None,
        assistant_model: "test-model".to_string(),
    }
}

pub fn test_app() -> TestApp {
    test_app_with(FakeAssistant::default())
}

pub fn test_app_with(assistant: FakeAssistant) -> TestApp {
    let db = Arc::new(InMemoryDb::default());
    let assistant = Arc::new(assistant);
    let state = Arc::new(AppState {
        db: db.clone(),
        assistant: assistant.clone(),
        curriculum: Arc::new(Curriculum::builtin()),
        quizzes: Arc::new(QuizBank::builtin()),
        config: Arc::new(test_config()),
    });
    TestApp {
        router: build_router(state),
        db,
        assistant,
    }
}

impl TestApp {
    /// Sends one request and returns the status with the body parsed as JSON
    /// (`Value::Null` for an empty or non-JSON body).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        user: Option<Uuid>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None, None).await
    }

    /// Registers a video under `dsa/beginner/arrays` and returns its id.
    pub async fn upload_arrays_video(&self, instructor: Uuid, title: &str) -> Uuid {
        let (status, body) = self
            .send(
                "POST",
                "/videos",
                Some(instructor),
                Some(serde_json::json!({
                    "title": title,
                    "domain": "dsa",
                    "difficulty": "beginner",
                    "topic": "arrays",
                    "file_name": "lecture.mp4",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("video id in response")
    }
}
