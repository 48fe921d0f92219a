//! crates/learnsolve_core/src/media.rs
//!
//! Merges the curriculum's built-in video slots with instructor uploads into
//! one list of playable entries for a topic.

use crate::curriculum::Topic;
use crate::domain::Video;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// The curriculum's own video slot for a question.
    Static { question_id: String, title: String },
    /// An instructor upload.
    Uploaded(Video),
}

impl VideoSource {
    pub fn question_id(&self) -> Option<&str> {
        match self {
            VideoSource::Static { question_id, .. } => Some(question_id),
            VideoSource::Uploaded(video) => video.question_id.as_deref(),
        }
    }
}

/// One entry per question, in question order: its newest linked upload if
/// there is one, else its static slot when the question has a video. Every
/// upload not placed in a question slot follows at the end, in input order.
///
/// `uploaded` is expected to already be narrowed to the topic, newest first.
pub fn resolve_topic_videos(topic: &Topic, uploaded: &[Video]) -> Vec<VideoSource> {
    let mut sources = Vec::with_capacity(topic.questions.len());
    let mut placed = HashSet::new();

    for question in &topic.questions {
        let linked = uploaded
            .iter()
            .find(|v| v.question_id.as_deref() == Some(question.id.as_str()));
        match linked {
            Some(video) => {
                placed.insert(video.id);
                sources.push(VideoSource::Uploaded(video.clone()));
            }
            None if question.has_video => sources.push(VideoSource::Static {
                question_id: question.id.clone(),
                title: question.title.clone(),
            }),
            None => {}
        }
    }

    sources.extend(
        uploaded
            .iter()
            .filter(|v| !placed.contains(&v.id))
            .cloned()
            .map(VideoSource::Uploaded),
    );

    sources
}
