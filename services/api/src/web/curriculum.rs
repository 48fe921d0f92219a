//! services/api/src/web/curriculum.rs
//!
//! Read-only curriculum routes. Unknown identifiers in the path are a normal
//! outcome: single-entity routes answer 404, list routes answer `[]`.

use crate::web::middleware::optional_user;
use crate::web::rest::{port_failure, HandlerError};
use crate::web::state::AppState;
use crate::web::videos::VideoResponse;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use learnsolve_core::curriculum::{DifficultyLevel, Domain, Question, QuestionLocation, Topic};
use learnsolve_core::domain::VideoFilter;
use learnsolve_core::media::{resolve_topic_videos, VideoSource};
use learnsolve_core::search::{filter_questions, filter_topics, search, SearchHit, SearchHitKind};
use learnsolve_core::stats::{difficulty_problem_count, domain_summary, topic_progress};
use learnsolve_core::sync::FetchState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;
use utoipa::{IntoParams, ToSchema};

//=========================================================================================
// API Response and Query Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct DomainSummaryResponse {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub topic_count: usize,
    pub problem_count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DifficultySummaryResponse {
    pub id: String,
    pub name: String,
    pub topic_count: usize,
    pub problem_count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DomainResponse {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub difficulties: Vec<DifficultySummaryResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct TopicSummaryResponse {
    pub id: String,
    pub name: String,
    pub problem_count: usize,
    pub completed_count: usize,
    pub progress_percent: u32,
}

#[derive(Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: String,
    pub title: String,
    /// Easy, Medium or Hard.
    pub difficulty: String,
    pub time: String,
    pub completed: bool,
    pub has_video: bool,
}

#[derive(Serialize, ToSchema)]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    pub progress_percent: u32,
    pub questions: Vec<QuestionResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct QuestionDetailResponse {
    pub domain_id: String,
    pub domain_name: String,
    pub difficulty_id: String,
    pub difficulty_name: String,
    pub topic_id: String,
    pub topic_name: String,
    pub question: QuestionResponse,
}

#[derive(Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSourceResponse {
    StaticVideo { question_id: String, title: String },
    UploadedVideo { video: VideoResponse },
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchHitKindResponse {
    Domain,
    Topic,
    Question,
}

#[derive(Serialize, ToSchema)]
pub struct SearchHitResponse {
    pub kind: SearchHitKindResponse,
    pub title: String,
    pub subtitle: Option<String>,
    pub path: String,
}

/// Local name filter used by the topic and question lists.
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct NameFilter {
    /// Case-insensitive substring to keep.
    pub q: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

//=========================================================================================
// Domain -> Response Mapping
//=========================================================================================

impl DomainSummaryResponse {
    fn from_domain(domain: &Domain) -> Self {
        let summary = domain_summary(domain);
        Self {
            id: domain.id.clone(),
            name: domain.name.clone(),
            short_name: domain.short_name.clone(),
            topic_count: summary.topic_count,
            problem_count: summary.problem_count,
        }
    }
}

impl DifficultySummaryResponse {
    fn from_level(level: &DifficultyLevel) -> Self {
        Self {
            id: level.id.as_str().to_string(),
            name: level.name.clone(),
            topic_count: level.topics.len(),
            problem_count: difficulty_problem_count(level),
        }
    }
}

impl QuestionResponse {
    fn from_question(question: &Question, completed: &HashSet<String>) -> Self {
        Self {
            id: question.id.clone(),
            title: question.title.clone(),
            difficulty: question.difficulty.as_str().to_string(),
            time: question.time.clone(),
            completed: question.completed || completed.contains(&question.id),
            has_video: question.has_video,
        }
    }
}

fn is_completed<'a>(completed: &'a HashSet<String>) -> impl Fn(&Question) -> bool + 'a {
    move |q: &Question| q.completed || completed.contains(&q.id)
}

impl TopicSummaryResponse {
    fn from_topic(topic: &Topic, completed: &HashSet<String>) -> Self {
        let progress = topic_progress(topic, is_completed(completed));
        Self {
            id: topic.id.clone(),
            name: topic.name.clone(),
            problem_count: progress.total,
            completed_count: progress.completed,
            progress_percent: progress.percent,
        }
    }
}

impl QuestionDetailResponse {
    fn from_location(loc: QuestionLocation<'_>, completed: &HashSet<String>) -> Self {
        Self {
            domain_id: loc.domain.id.clone(),
            domain_name: loc.domain.name.clone(),
            difficulty_id: loc.difficulty.id.as_str().to_string(),
            difficulty_name: loc.difficulty.name.clone(),
            topic_id: loc.topic.id.clone(),
            topic_name: loc.topic.name.clone(),
            question: QuestionResponse::from_question(loc.question, completed),
        }
    }
}

impl From<SearchHit> for SearchHitResponse {
    fn from(hit: SearchHit) -> Self {
        let kind = match hit.kind {
            SearchHitKind::Domain => SearchHitKindResponse::Domain,
            SearchHitKind::Topic => SearchHitKindResponse::Topic,
            SearchHitKind::Question => SearchHitKindResponse::Question,
        };
        Self {
            kind,
            title: hit.title,
            subtitle: hit.subtitle,
            path: hit.path,
        }
    }
}

/// Question ids the caller has completed. Progress is an overlay: when the
/// caller is anonymous or the store is unavailable, nothing is completed.
async fn completed_questions(app_state: &AppState, headers: &HeaderMap) -> HashSet<String> {
    let Some(user_id) = optional_user(headers) else {
        return HashSet::new();
    };
    let fetched = FetchState::from_result(app_state.db.get_completed_question_ids(user_id).await);
    if let FetchState::Failed(reason) = &fetched {
        warn!("Failed to load completed questions for {}: {}", user_id, reason);
    }
    fetched
        .into_ready()
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

fn not_found(what: &str) -> HandlerError {
    (StatusCode::NOT_FOUND, format!("{} not found", what))
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List every domain with its topic and problem counts.
#[utoipa::path(
    get,
    path = "/curriculum/domains",
    responses((status = 200, description = "All domains", body = Vec<DomainSummaryResponse>))
)]
pub async fn list_domains_handler(State(app_state): State<Arc<AppState>>) -> Json<Vec<DomainSummaryResponse>> {
    Json(
        app_state
            .curriculum
            .domains()
            .iter()
            .map(DomainSummaryResponse::from_domain)
            .collect(),
    )
}

/// Get one domain with its difficulty levels.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}",
    params(("domain_id" = String, Path, description = "Domain identifier")),
    responses(
        (status = 200, description = "The domain", body = DomainResponse),
        (status = 404, description = "Unknown domain")
    )
)]
pub async fn get_domain_handler(
    State(app_state): State<Arc<AppState>>,
    Path(domain_id): Path<String>,
) -> Result<Json<DomainResponse>, HandlerError> {
    let domain = app_state
        .curriculum
        .find_domain(&domain_id)
        .ok_or_else(|| not_found("Domain"))?;

    Ok(Json(DomainResponse {
        id: domain.id.clone(),
        name: domain.name.clone(),
        short_name: domain.short_name.clone(),
        difficulties: domain
            .difficulties
            .iter()
            .map(DifficultySummaryResponse::from_level)
            .collect(),
    }))
}

/// Get one difficulty level of a domain.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}",
    params(
        ("domain_id" = String, Path, description = "Domain identifier"),
        ("difficulty_id" = String, Path, description = "beginner, intermediate or advanced")
    ),
    responses(
        (status = 200, description = "The difficulty level", body = DifficultySummaryResponse),
        (status = 404, description = "Unknown domain or difficulty")
    )
)]
pub async fn get_difficulty_handler(
    State(app_state): State<Arc<AppState>>,
    Path((domain_id, difficulty_id)): Path<(String, String)>,
) -> Result<Json<DifficultySummaryResponse>, HandlerError> {
    app_state
        .curriculum
        .find_difficulty(&domain_id, &difficulty_id)
        .map(|level| Json(DifficultySummaryResponse::from_level(level)))
        .ok_or_else(|| not_found("Difficulty level"))
}

/// List the topics of a difficulty level with the caller's progress.
///
/// Unknown keys produce an empty list.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics",
    params(
        ("domain_id" = String, Path, description = "Domain identifier"),
        ("difficulty_id" = String, Path, description = "beginner, intermediate or advanced"),
        ("x-user-id" = Option<uuid::Uuid>, Header, description = "Overlay this user's progress."),
        NameFilter
    ),
    responses((status = 200, description = "Topics in curriculum order", body = Vec<TopicSummaryResponse>))
)]
pub async fn list_topics_handler(
    State(app_state): State<Arc<AppState>>,
    Path((domain_id, difficulty_id)): Path<(String, String)>,
    Query(filter): Query<NameFilter>,
    headers: HeaderMap,
) -> Json<Vec<TopicSummaryResponse>> {
    let topics = app_state
        .curriculum
        .find_topics_for_difficulty(&domain_id, &difficulty_id);
    if topics.is_empty() {
        return Json(Vec::new());
    }

    let completed = completed_questions(&app_state, &headers).await;
    let query = filter.q.unwrap_or_default();
    Json(
        filter_topics(topics, &query)
            .into_iter()
            .map(|t| TopicSummaryResponse::from_topic(t, &completed))
            .collect(),
    )
}

/// Get one topic with its questions.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}",
    params(
        ("domain_id" = String, Path, description = "Domain identifier"),
        ("difficulty_id" = String, Path, description = "beginner, intermediate or advanced"),
        ("topic_id" = String, Path, description = "Topic identifier"),
        ("x-user-id" = Option<uuid::Uuid>, Header, description = "Overlay this user's progress.")
    ),
    responses(
        (status = 200, description = "The topic", body = TopicResponse),
        (status = 404, description = "Unknown domain, difficulty or topic")
    )
)]
pub async fn get_topic_handler(
    State(app_state): State<Arc<AppState>>,
    Path((domain_id, difficulty_id, topic_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Json<TopicResponse>, HandlerError> {
    let topic = app_state
        .curriculum
        .find_topic(&domain_id, &difficulty_id, &topic_id)
        .ok_or_else(|| not_found("Topic"))?;

    let completed = completed_questions(&app_state, &headers).await;
    let progress = topic_progress(topic, is_completed(&completed));
    Ok(Json(TopicResponse {
        id: topic.id.clone(),
        name: topic.name.clone(),
        progress_percent: progress.percent,
        questions: topic
            .questions
            .iter()
            .map(|q| QuestionResponse::from_question(q, &completed))
            .collect(),
    }))
}

/// List the questions of a topic. Unknown keys produce an empty list.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}/questions",
    params(
        ("domain_id" = String, Path, description = "Domain identifier"),
        ("difficulty_id" = String, Path, description = "beginner, intermediate or advanced"),
        ("topic_id" = String, Path, description = "Topic identifier"),
        ("x-user-id" = Option<uuid::Uuid>, Header, description = "Overlay this user's progress."),
        NameFilter
    ),
    responses((status = 200, description = "Questions in curriculum order", body = Vec<QuestionResponse>))
)]
pub async fn list_questions_handler(
    State(app_state): State<Arc<AppState>>,
    Path((domain_id, difficulty_id, topic_id)): Path<(String, String, String)>,
    Query(filter): Query<NameFilter>,
    headers: HeaderMap,
) -> Json<Vec<QuestionResponse>> {
    let questions = app_state
        .curriculum
        .find_questions_for_topic(&domain_id, &difficulty_id, &topic_id);
    if questions.is_empty() {
        return Json(Vec::new());
    }

    let completed = completed_questions(&app_state, &headers).await;
    let query = filter.q.unwrap_or_default();
    Json(
        filter_questions(questions, &query)
            .into_iter()
            .map(|q| QuestionResponse::from_question(q, &completed))
            .collect(),
    )
}

/// List the playable videos of a topic: uploads linked to its questions,
/// the curriculum's own video slots, then unlinked uploads.
#[utoipa::path(
    get,
    path = "/curriculum/domains/{domain_id}/difficulties/{difficulty_id}/topics/{topic_id}/videos",
    params(
        ("domain_id" = String, Path, description = "Domain identifier"),
        ("difficulty_id" = String, Path, description = "beginner, intermediate or advanced"),
        ("topic_id" = String, Path, description = "Topic identifier")
    ),
    responses(
        (status = 200, description = "Videos for the topic", body = Vec<VideoSourceResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_topic_videos_handler(
    State(app_state): State<Arc<AppState>>,
    Path((domain_id, difficulty_id, topic_id)): Path<(String, String, String)>,
) -> Result<Json<Vec<VideoSourceResponse>>, HandlerError> {
    let Some(topic) = app_state
        .curriculum
        .find_topic(&domain_id, &difficulty_id, &topic_id)
    else {
        return Ok(Json(Vec::new()));
    };

    let filter = VideoFilter {
        domain: Some(domain_id),
        topic: Some(topic_id),
        difficulty: Some(difficulty_id),
    };
    let uploaded = app_state
        .db
        .list_videos(&filter)
        .await
        .map_err(|e| port_failure("list topic videos", e))?;

    let base_url = &app_state.config.storage_public_url;
    Ok(Json(
        resolve_topic_videos(topic, &uploaded)
            .into_iter()
            .map(|source| match source {
                VideoSource::Static { question_id, title } => {
                    VideoSourceResponse::StaticVideo { question_id, title }
                }
                VideoSource::Uploaded(video) => VideoSourceResponse::UploadedVideo {
                    video: VideoResponse::from_video(video, base_url),
                },
            })
            .collect(),
    ))
}

/// Get a question anywhere in the curriculum, with its lineage.
#[utoipa::path(
    get,
    path = "/curriculum/questions/{question_id}",
    params(
        ("question_id" = String, Path, description = "Question identifier"),
        ("x-user-id" = Option<uuid::Uuid>, Header, description = "Overlay this user's progress.")
    ),
    responses(
        (status = 200, description = "The question", body = QuestionDetailResponse),
        (status = 404, description = "Unknown question")
    )
)]
pub async fn get_question_handler(
    State(app_state): State<Arc<AppState>>,
    Path(question_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<QuestionDetailResponse>, HandlerError> {
    let location = app_state
        .curriculum
        .locate_question(&question_id)
        .ok_or_else(|| not_found("Question"))?;

    let completed = completed_questions(&app_state, &headers).await;
    Ok(Json(QuestionDetailResponse::from_location(location, &completed)))
}

/// Search domain names, topic names and question titles.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses((status = 200, description = "At most eight hits", body = Vec<SearchHitResponse>))
)]
pub async fn search_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<SearchHitResponse>> {
    Json(
        search(&app_state.curriculum, &query.q)
            .into_iter()
            .map(SearchHitResponse::from)
            .collect(),
    )
}
