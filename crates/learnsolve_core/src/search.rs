//! crates/learnsolve_core/src/search.rs
//!
//! Case-insensitive substring search over the curriculum tree.

use crate::curriculum::{Curriculum, Question, Topic};

/// Upper bound on hits returned by `search`.
pub const MAX_SEARCH_RESULTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHitKind {
    Domain,
    Topic,
    Question,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: SearchHitKind,
    pub title: String,
    pub subtitle: Option<String>,
    /// Client-side route the hit navigates to.
    pub path: String,
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Searches domain names, topic names and question titles in tree order.
/// A blank query matches nothing.
pub fn search(curriculum: &Curriculum, query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for domain in curriculum.domains() {
        if contains_ignore_case(&domain.name, &needle) {
            hits.push(SearchHit {
                kind: SearchHitKind::Domain,
                title: domain.name.clone(),
                subtitle: None,
                path: "/domains".to_string(),
            });
        }

        for difficulty in &domain.difficulties {
            for topic in &difficulty.topics {
                if contains_ignore_case(&topic.name, &needle) {
                    hits.push(SearchHit {
                        kind: SearchHitKind::Topic,
                        title: topic.name.clone(),
                        subtitle: Some(format!("{} • {}", domain.name, difficulty.name)),
                        path: format!(
                            "/domains/{}/{}/{}/questions",
                            domain.id, difficulty.id, topic.id
                        ),
                    });
                }

                for question in &topic.questions {
                    if contains_ignore_case(&question.title, &needle) {
                        hits.push(SearchHit {
                            kind: SearchHitKind::Question,
                            title: question.title.clone(),
                            subtitle: Some(format!("{} • {}", topic.name, difficulty.name)),
                            path: format!("/solve/{}", question.id),
                        });
                    }
                }
            }
        }
    }

    hits.truncate(MAX_SEARCH_RESULTS);
    hits
}

/// Local name filter for the topic list view. A blank query keeps everything.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    let needle = query.trim().to_lowercase();
    topics
        .iter()
        .filter(|t| contains_ignore_case(&t.name, &needle))
        .collect()
}

/// Local title filter for the question list view.
pub fn filter_questions<'a>(questions: &'a [Question], query: &str) -> Vec<&'a Question> {
    let needle = query.trim().to_lowercase();
    questions
        .iter()
        .filter(|q| contains_ignore_case(&q.title, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_has_no_hits() {
        let c = Curriculum::builtin();
        assert!(search(&c, "").is_empty());
        assert!(search(&c, "   ").is_empty());
    }

    #[test]
    fn hits_are_capped() {
        let c = Curriculum::builtin();
        // "find" appears in far more than eight question titles.
        assert_eq!(search(&c, "find").len(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn topic_hit_precedes_its_questions() {
        let c = Curriculum::builtin();
        let hits = search(&c, "segment tree");
        assert_eq!(hits[0].kind, SearchHitKind::Topic);
        assert_eq!(hits[0].path, "/domains/dsa/advanced/segment-tree/questions");
        assert_eq!(hits[0].subtitle.as_deref(), Some("Data Structures & Algorithms • Advanced"));
        assert_eq!(hits[1].kind, SearchHitKind::Question);
        assert_eq!(hits[1].path, "/solve/dsa-adv-seg-1");
    }

    #[test]
    fn domain_names_match_case_insensitively() {
        let c = Curriculum::builtin();
        let hits = search(&c, "MATHEMATICS");
        assert_eq!(hits[0].kind, SearchHitKind::Domain);
        assert_eq!(hits[0].title, "Mathematics");
    }

    #[test]
    fn local_filters() {
        let c = Curriculum::builtin();
        let topics = c.find_topics_for_difficulty("dsa", "beginner");
        assert_eq!(filter_topics(topics, "").len(), topics.len());
        let arrays = filter_topics(topics, "ARR");
        assert_eq!(arrays.len(), 1);
        assert_eq!(arrays[0].id, "arrays");
        assert!(filter_questions(&arrays[0].questions, "no such title").is_empty());
    }
}
