//! crates/learnsolve_core/src/quiz.rs
//!
//! Multiple-choice quizzes and their scoring.

use crate::stats::completion_percent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReview {
    pub selected: Option<usize>,
    pub correct: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
    pub review: Vec<AnswerReview>,
}

impl Quiz {
    /// Scores one answer slot per question. Missing slots count as
    /// unanswered; surplus slots are ignored.
    pub fn score(&self, answers: &[Option<usize>]) -> QuizResult {
        let review: Vec<AnswerReview> = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let selected = answers.get(i).copied().flatten();
                AnswerReview {
                    selected,
                    correct: q.correct,
                    is_correct: selected == Some(q.correct),
                }
            })
            .collect();

        let correct = review.iter().filter(|r| r.is_correct).count();
        QuizResult {
            correct: correct as u32,
            total: review.len() as u32,
            percent: completion_percent(correct, review.len()),
            review,
        }
    }
}

/// The set of quizzes available to learners.
#[derive(Debug, Clone, Default)]
pub struct QuizBank {
    quizzes: Vec<Quiz>,
}

impl QuizBank {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self { quizzes }
    }

    pub fn builtin() -> Self {
        let q = |prompt: &str, options: [&str; 4], correct: usize| QuizQuestion {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        };

        Self::new(vec![Quiz {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            questions: vec![
                q(
                    "What is the time complexity of the optimal Two Sum solution using a hash map?",
                    ["O(n²)", "O(n log n)", "O(n)", "O(1)"],
                    2,
                ),
                q(
                    "What is the space complexity of the hash map approach?",
                    ["O(1)", "O(n)", "O(n²)", "O(log n)"],
                    1,
                ),
                q(
                    "In the Two Sum problem, what do we store in the hash map?",
                    [
                        "The sum of pairs",
                        "The index of each element",
                        "The difference of pairs",
                        "The product of pairs",
                    ],
                    1,
                ),
                q(
                    "What would happen if we use a nested loop instead of a hash map?",
                    [
                        "Same time complexity",
                        "Faster execution",
                        "Time complexity becomes O(n²)",
                        "Space complexity increases",
                    ],
                    2,
                ),
            ],
        }])
    }

    pub fn find(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == quiz_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_correct_scores_one_hundred() {
        let bank = QuizBank::builtin();
        let quiz = bank.find("1").unwrap();
        let result = quiz.score(&[Some(2), Some(1), Some(1), Some(2)]);
        assert_eq!(result.correct, 4);
        assert_eq!(result.percent, 100);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let bank = QuizBank::builtin();
        let quiz = bank.find("1").unwrap();
        let result = quiz.score(&[Some(2), None]);
        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 4);
        assert_eq!(result.percent, 25);
        assert_eq!(result.review[3].selected, None);
        assert!(!result.review[3].is_correct);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let quiz = Quiz {
            id: "empty".into(),
            title: "Empty".into(),
            questions: Vec::new(),
        };
        assert_eq!(quiz.score(&[Some(0)]).percent, 0);
    }

    #[test]
    fn unknown_quiz_is_absent() {
        assert!(QuizBank::builtin().find("42").is_none());
    }
}
