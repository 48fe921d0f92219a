mod common;

use axum::http::StatusCode;
use common::{test_app, test_app_with, FakeAssistant};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use uuid::Uuid;

const ARRAYS: &str = "/curriculum/domains/dsa/difficulties/beginner/topics/arrays";

#[tokio::test]
async fn progress_is_clamped_and_overwritten() {
    let app = test_app();
    let video = app.upload_arrays_video(Uuid::new_v4(), "Max").await;
    let student = Uuid::new_v4();
    let uri = format!("/progress/{}", video);

    let (status, body) = app
        .send("PUT", &uri, Some(student), Some(json!({ "progress_percent": 40 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress_percent"], 40);
    assert_eq!(body["completed"], false);
    let first_id = body["id"].clone();

    let (_, body) = app
        .send("PUT", &uri, Some(student), Some(json!({ "progress_percent": 250 })))
        .await;
    assert_eq!(body["progress_percent"], 100);
    assert_eq!(body["completed"], true);
    assert_eq!(body["id"], first_id);

    let (_, list) = app.send("GET", "/progress", Some(student), None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn progress_on_unknown_video_is_not_found() {
    let app = test_app();
    let (status, _) = app
        .send(
            "POST",
            &format!("/progress/{}/complete", Uuid::new_v4()),
            Some(Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn completed_linked_video_marks_question_for_that_user_only() {
    let app = test_app();
    let instructor = Uuid::new_v4();
    let student = Uuid::new_v4();
    let video = app.upload_arrays_video(instructor, "Max").await;
    app.send(
        "PUT",
        &format!("/videos/{}/link", video),
        Some(instructor),
        Some(json!({ "question_id": "dsa-beg-arr-1" })),
    )
    .await;

    let (status, _) = app
        .send("POST", &format!("/progress/{}/complete", video), Some(student), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, questions) = app
        .send("GET", &format!("{}/questions", ARRAYS), Some(student), None)
        .await;
    let completed: Vec<bool> = questions
        .as_array()
        .expect("array")
        .iter()
        .map(|q| q["completed"] == Value::Bool(true))
        .collect();
    assert_eq!(completed, vec![true, false, false]);

    let (_, topic) = app.send("GET", ARRAYS, Some(student), None).await;
    assert_eq!(topic["progress_percent"], 33);

    let (_, anonymous) = app.get(ARRAYS).await;
    assert_eq!(anonymous["progress_percent"], 0);

    let (_, stats) = app.send("GET", "/stats/progress", Some(student), None).await;
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["completion_rate"], 100);
}

#[tokio::test]
async fn unreadable_progress_shows_nothing_completed() {
    let app = test_app();
    let instructor = Uuid::new_v4();
    let student = Uuid::new_v4();
    let video = app.upload_arrays_video(instructor, "Max").await;
    app.send(
        "PUT",
        &format!("/videos/{}/link", video),
        Some(instructor),
        Some(json!({ "question_id": "dsa-beg-arr-1" })),
    )
    .await;
    app.send("POST", &format!("/progress/{}/complete", video), Some(student), None)
        .await;

    app.db.completions_offline.store(true, Ordering::SeqCst);
    let (status, topic) = app.send("GET", ARRAYS, Some(student), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(topic["progress_percent"], 0);
    assert_eq!(topic["questions"][0]["completed"], false);
}

#[tokio::test]
async fn doubt_gets_assistant_explanation_with_problem_context() {
    let app = test_app();
    let instructor = Uuid::new_v4();
    let video = app.upload_arrays_video(instructor, "Max").await;
    app.send(
        "PUT",
        &format!("/videos/{}/link", video),
        Some(instructor),
        Some(json!({ "question_id": "dsa-beg-arr-1" })),
    )
    .await;

    let (status, body) = app
        .send(
            "POST",
            "/doubts",
            Some(Uuid::new_v4()),
            Some(json!({ "video_id": video, "doubt_text": "Why a single pass?" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["ai_explanation"], "explanation for: Why a single pass?");

    let context = app
        .assistant
        .last_context
        .lock()
        .expect("lock")
        .clone()
        .expect("assistant was called");
    assert!(context.contains("PROBLEM: Data Structures & Algorithms • Beginner • Arrays"));
    assert!(context.contains("VIDEO: Max"));
}

#[tokio::test]
async fn doubt_is_stored_when_assistant_fails() {
    let app = test_app_with(FakeAssistant {
        failing: true,
        ..FakeAssistant::default()
    });
    let video = app.upload_arrays_video(Uuid::new_v4(), "Max").await;

    let (status, body) = app
        .send(
            "POST",
            "/doubts",
            Some(Uuid::new_v4()),
            Some(json!({ "video_id": video, "doubt_text": "Stuck" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["ai_explanation"].is_null());
}

#[tokio::test]
async fn doubt_validation() {
    let app = test_app();
    let student = Uuid::new_v4();

    let (status, _) = app
        .send(
            "POST",
            "/doubts",
            Some(student),
            Some(json!({ "video_id": Uuid::new_v4(), "doubt_text": "Stuck" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let video = app.upload_arrays_video(Uuid::new_v4(), "Max").await;
    let (status, _) = app
        .send(
            "POST",
            "/doubts",
            Some(student),
            Some(json!({ "video_id": video, "doubt_text": "  " })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send("GET", "/doubts?status=open", Some(student), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn doubts_are_replied_to_and_resolved() {
    let app = test_app();
    let instructor = Uuid::new_v4();
    let video = app.upload_arrays_video(instructor, "Max").await;
    let (_, doubt) = app
        .send(
            "POST",
            "/doubts",
            Some(Uuid::new_v4()),
            Some(json!({ "video_id": video, "doubt_text": "Edge cases?" })),
        )
        .await;
    let doubt_id = doubt["id"].as_str().expect("doubt id").to_string();

    let (status, body) = app
        .send(
            "POST",
            &format!("/doubts/{}/reply", doubt_id),
            Some(instructor),
            Some(json!({ "reply": "Empty arrays." })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instructor_reply"], "Empty arrays.");
    assert_eq!(body["status"], "pending");

    let (_, pending) = app.send("GET", "/doubts?status=pending", Some(instructor), None).await;
    assert_eq!(pending.as_array().map(Vec::len), Some(1));

    let (status, body) = app
        .send("POST", &format!("/doubts/{}/resolve", doubt_id), Some(instructor), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "resolved");
    assert!(!body["resolved_at"].is_null());

    let (_, pending) = app.send("GET", "/doubts?status=pending", Some(instructor), None).await;
    assert_eq!(pending.as_array().map(Vec::len), Some(0));
    let (_, resolved) = app.send("GET", "/doubts?status=resolved", Some(instructor), None).await;
    assert_eq!(resolved.as_array().map(Vec::len), Some(1));

    let (status, _) = app
        .send("POST", &format!("/doubts/{}/resolve", Uuid::new_v4()), Some(instructor), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assistant_answers_with_question_context() {
    let app = test_app();
    let (status, body) = app
        .send(
            "POST",
            "/assistant/ask",
            Some(Uuid::new_v4()),
            Some(json!({ "message": "hint please", "question_id": "dsa-beg-arr-2" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "explanation for: hint please");

    let context = app.assistant.last_context.lock().expect("lock").clone();
    assert_eq!(
        context.as_deref(),
        Some("PROBLEM: Data Structures & Algorithms • Beginner • Arrays: Reverse an array")
    );
}

#[tokio::test]
async fn assistant_failure_is_bad_gateway() {
    let app = test_app_with(FakeAssistant {
        failing: true,
        ..FakeAssistant::default()
    });
    let (status, _) = app
        .send(
            "POST",
            "/assistant/ask",
            Some(Uuid::new_v4()),
            Some(json!({ "message": "hint please", "question_id": "no-such-question" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let context = app.assistant.last_context.lock().expect("lock").clone();
    assert_eq!(context.as_deref(), Some(""));
}

#[tokio::test]
async fn quiz_submission_is_scored_and_recorded() {
    let app = test_app();
    let student = Uuid::new_v4();

    let (status, body) = app
        .send(
            "POST",
            "/quizzes/1/submit",
            Some(student),
            Some(json!({ "answers": [2, 1, null, 0] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], 2);
    assert_eq!(body["total"], 4);
    assert_eq!(body["percent"], 50);
    assert_eq!(body["review"][2]["selected"], Value::Null);
    assert_eq!(body["review"][3]["correct"], 2);

    let (status, _) = app
        .send("POST", "/quizzes/1/submit", None, Some(json!({ "answers": [] })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send("POST", "/quizzes/9/submit", Some(student), Some(json!({ "answers": [] })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn instructor_stats_cover_own_videos_and_all_attempts() {
    let app = test_app();
    let instructor = Uuid::new_v4();
    let other = Uuid::new_v4();
    let student = Uuid::new_v4();

    let mine = app.upload_arrays_video(instructor, "Mine").await;
    app.upload_arrays_video(instructor, "Also mine").await;
    let theirs = app.upload_arrays_video(other, "Theirs").await;
    app.send(
        "PUT",
        &format!("/videos/{}/link", mine),
        Some(instructor),
        Some(json!({ "question_id": "dsa-beg-arr-3" })),
    )
    .await;

    for video in [mine, theirs] {
        app.send(
            "POST",
            "/doubts",
            Some(student),
            Some(json!({ "video_id": video, "doubt_text": "?" })),
        )
        .await;
    }
    for answers in [json!([2, 1, 1, 2]), json!([0, 0, 0, 0])] {
        app.send(
            "POST",
            "/quizzes/1/submit",
            Some(student),
            Some(json!({ "answers": answers })),
        )
        .await;
    }

    let (status, stats) = app.send("GET", "/instructor/stats", Some(instructor), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_videos"], 2);
    assert_eq!(stats["linked_videos"], 1);
    assert_eq!(stats["total_doubts"], 1);
    assert_eq!(stats["pending_doubts"], 1);
    assert_eq!(stats["resolved_doubts"], 0);
    assert_eq!(stats["quiz_attempts"], 2);
    assert_eq!(stats["avg_quiz_score"], 50);
}
