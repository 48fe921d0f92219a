//! crates/learnsolve_core/src/stats.rs
//!
//! Display-only aggregates. Everything here is recomputed on demand from the
//! tree and the current records; nothing is cached.

use crate::curriculum::{DifficultyLevel, Domain, Question, Topic};
use crate::domain::{Doubt, DoubtStatus, QuizAttempt, UserProgress, Video};

/// `round(100 * completed / total)`, rounding halves up. An empty
/// denominator yields 0.
pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u32
}

/// Rounded mean, 0 for an empty input.
fn rounded_mean(sum: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    ((2 * sum + count) / (2 * count)) as u32
}

//=========================================================================================
// Curriculum Aggregates
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Progress through a topic given the externally sourced completion flags.
pub fn topic_progress<F>(topic: &Topic, is_completed: F) -> TopicProgress
where
    F: Fn(&Question) -> bool,
{
    let total = topic.questions.len();
    let completed = topic.questions.iter().filter(|q| is_completed(q)).count();
    TopicProgress {
        completed,
        total,
        percent: completion_percent(completed, total),
    }
}

pub fn difficulty_problem_count(level: &DifficultyLevel) -> usize {
    level.topics.iter().map(|t| t.questions.len()).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSummary {
    pub topic_count: usize,
    pub problem_count: usize,
}

pub fn domain_summary(domain: &Domain) -> DomainSummary {
    DomainSummary {
        topic_count: domain.difficulties.iter().map(|d| d.topics.len()).sum(),
        problem_count: domain.difficulties.iter().map(difficulty_problem_count).sum(),
    }
}

//=========================================================================================
// Learner and Instructor Aggregates
//=========================================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub completion_rate: u32,
}

pub fn progress_stats(progress: &[UserProgress]) -> ProgressStats {
    let total = progress.len();
    let completed = progress.iter().filter(|p| p.completed).count();
    let in_progress = progress
        .iter()
        .filter(|p| !p.completed && p.progress_percent > 0)
        .count();
    let not_started = progress.iter().filter(|p| p.progress_percent == 0).count();

    ProgressStats {
        total,
        completed,
        in_progress,
        not_started,
        completion_rate: completion_percent(completed, total),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructorStats {
    pub total_videos: usize,
    pub linked_videos: usize,
    pub total_doubts: usize,
    pub pending_doubts: usize,
    pub resolved_doubts: usize,
    pub quiz_attempts: usize,
    pub avg_quiz_score: u32,
}

pub fn instructor_stats(videos: &[Video], doubts: &[Doubt], attempts: &[QuizAttempt]) -> InstructorStats {
    let pending_doubts = doubts
        .iter()
        .filter(|d| d.status == DoubtStatus::Pending)
        .count();
    let score_sum: u64 = attempts.iter().map(|a| u64::from(a.score_percent)).sum();

    InstructorStats {
        total_videos: videos.len(),
        linked_videos: videos.iter().filter(|v| v.question_id.is_some()).count(),
        total_doubts: doubts.len(),
        pending_doubts,
        resolved_doubts: doubts.len() - pending_doubts,
        quiz_attempts: attempts.len(),
        avg_quiz_score: rounded_mean(score_sum, attempts.len()),
    }
}
