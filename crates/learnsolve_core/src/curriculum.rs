//! crates/learnsolve_core/src/curriculum.rs
//!
//! The curriculum tree (Domain -> DifficultyLevel -> Topic -> Question) and
//! the lookup layer every view navigates it through.
//!
//! The tree is materialised once at startup and never mutated afterwards.
//! Lookups take untrusted identifiers (route parameters) and report absence
//! as `None` or an empty slice, never as an error.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{DomainSeed, CATALOG};

/// Display string every generated question carries as its estimated time.
pub const DEFAULT_QUESTION_TIME: &str = "10 min";

//=========================================================================================
// Tree Node Types
//=========================================================================================

/// The fixed set of difficulty groupings inside a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyId {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyId {
    pub const ALL: [DifficultyId; 3] = [
        DifficultyId::Beginner,
        DifficultyId::Intermediate,
        DifficultyId::Advanced,
    ];

    /// The identifier used in URLs and foreign keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyId::Beginner => "beginner",
            DifficultyId::Intermediate => "intermediate",
            DifficultyId::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DifficultyId::Beginner => "Beginner",
            DifficultyId::Intermediate => "Intermediate",
            DifficultyId::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for DifficultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the difficulty groupings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty level: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for DifficultyId {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DifficultyId::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Per-question difficulty label. Independent of the `DifficultyId` grouping
/// the question sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionDifficulty::Easy => "Easy",
            QuestionDifficulty::Medium => "Medium",
            QuestionDifficulty::Hard => "Hard",
        }
    }
}

/// A single practice problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub difficulty: QuestionDifficulty,
    pub time: String,
    pub completed: bool,
    pub has_video: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyLevel {
    pub id: DifficultyId,
    pub name: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub difficulties: Vec<DifficultyLevel>,
}

/// A question together with the chain of nodes that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionLocation<'a> {
    pub domain: &'a Domain,
    pub difficulty: &'a DifficultyLevel,
    pub topic: &'a Topic,
    pub question: &'a Question,
}

//=========================================================================================
// Tree Construction
//=========================================================================================

/// Expands an ordered list of titles into questions with generated ids.
///
/// The i-th title (1-indexed) gets the id `"{base_key}-{i}"`. Ids are
/// persisted elsewhere as foreign keys (video links, progress), so this
/// derivation must stay stable.
pub fn create_questions(base_key: &str, titles: &[&str]) -> Vec<Question> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| Question {
            id: format!("{}-{}", base_key, index + 1),
            title: (*title).to_string(),
            difficulty: QuestionDifficulty::Easy,
            time: DEFAULT_QUESTION_TIME.to_string(),
            completed: false,
            has_video: true,
        })
        .collect()
}

fn materialize(seed: &DomainSeed) -> Domain {
    Domain {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        short_name: seed.short_name.to_string(),
        difficulties: seed
            .difficulties
            .iter()
            .map(|level| DifficultyLevel {
                id: level.id,
                name: level.id.display_name().to_string(),
                topics: level
                    .topics
                    .iter()
                    .map(|topic| Topic {
                        id: topic.id.to_string(),
                        name: topic.name.to_string(),
                        questions: create_questions(topic.base_key, topic.titles),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Structural defects in a curriculum definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurriculumError {
    #[error("duplicate domain id: {0}")]
    DuplicateDomain(String),
    #[error("duplicate difficulty '{difficulty}' in domain '{domain}'")]
    DuplicateDifficulty { domain: String, difficulty: String },
    #[error("duplicate topic '{topic}' in {domain}/{difficulty}")]
    DuplicateTopic {
        domain: String,
        difficulty: String,
        topic: String,
    },
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),
}

//=========================================================================================
// The Curriculum Tree and its Lookup Layer
//=========================================================================================

/// The read-only curriculum tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    domains: Vec<Domain>,
}

impl Curriculum {
    /// Builds the tree shipped with the platform.
    pub fn builtin() -> Self {
        Self {
            domains: CATALOG.iter().map(materialize).collect(),
        }
    }

    pub fn from_domains(domains: Vec<Domain>) -> Self {
        Self { domains }
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn find_domain(&self, domain_id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == domain_id)
    }

    pub fn find_difficulty(&self, domain_id: &str, difficulty_id: &str) -> Option<&DifficultyLevel> {
        self.find_domain(domain_id)?
            .difficulties
            .iter()
            .find(|d| d.id.as_str() == difficulty_id)
    }

    pub fn find_topic(&self, domain_id: &str, difficulty_id: &str, topic_id: &str) -> Option<&Topic> {
        self.find_difficulty(domain_id, difficulty_id)?
            .topics
            .iter()
            .find(|t| t.id == topic_id)
    }

    /// Topics of the resolved difficulty level, or an empty slice.
    pub fn find_topics_for_difficulty(&self, domain_id: &str, difficulty_id: &str) -> &[Topic] {
        self.find_difficulty(domain_id, difficulty_id)
            .map(|d| d.topics.as_slice())
            .unwrap_or(&[])
    }

    /// Questions of the resolved topic, or an empty slice.
    pub fn find_questions_for_topic(
        &self,
        domain_id: &str,
        difficulty_id: &str,
        topic_id: &str,
    ) -> &[Question] {
        self.find_topic(domain_id, difficulty_id, topic_id)
            .map(|t| t.questions.as_slice())
            .unwrap_or(&[])
    }

    /// Resolves a question through its explicit parent chain.
    pub fn find_question(
        &self,
        domain_id: &str,
        difficulty_id: &str,
        topic_id: &str,
        question_id: &str,
    ) -> Option<&Question> {
        self.find_questions_for_topic(domain_id, difficulty_id, topic_id)
            .iter()
            .find(|q| q.id == question_id)
    }

    /// Walks every question in tree order along with its lineage.
    pub fn questions(&self) -> impl Iterator<Item = QuestionLocation<'_>> {
        self.domains.iter().flat_map(|domain| {
            domain.difficulties.iter().flat_map(move |difficulty| {
                difficulty.topics.iter().flat_map(move |topic| {
                    topic.questions.iter().map(move |question| QuestionLocation {
                        domain,
                        difficulty,
                        topic,
                        question,
                    })
                })
            })
        })
    }

    /// Finds a question anywhere in the tree by id. Scans the tree; the id
    /// itself is never parsed.
    pub fn locate_question(&self, question_id: &str) -> Option<QuestionLocation<'_>> {
        self.questions().find(|loc| loc.question.id == question_id)
    }

    /// Verifies the uniqueness rules of every level of the tree.
    pub fn check_invariants(&self) -> Result<(), CurriculumError> {
        let mut domain_ids = HashSet::new();
        let mut question_ids = HashSet::new();

        for domain in &self.domains {
            if !domain_ids.insert(domain.id.as_str()) {
                return Err(CurriculumError::DuplicateDomain(domain.id.clone()));
            }

            let mut difficulty_ids = HashSet::new();
            for difficulty in &domain.difficulties {
                if !difficulty_ids.insert(difficulty.id) {
                    return Err(CurriculumError::DuplicateDifficulty {
                        domain: domain.id.clone(),
                        difficulty: difficulty.id.to_string(),
                    });
                }

                let mut topic_ids = HashSet::new();
                for topic in &difficulty.topics {
                    if !topic_ids.insert(topic.id.as_str()) {
                        return Err(CurriculumError::DuplicateTopic {
                            domain: domain.id.clone(),
                            difficulty: difficulty.id.to_string(),
                            topic: topic.id.clone(),
                        });
                    }
                    for question in &topic.questions {
                        if !question_ids.insert(question.id.as_str()) {
                            return Err(CurriculumError::DuplicateQuestion(question.id.clone()));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn curriculum() -> Curriculum {
        Curriculum::builtin()
    }

    #[test]
    fn create_questions_numbers_from_one_with_defaults() {
        let questions = create_questions("k", &["first", "second"]);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "k-1");
        assert_eq!(questions[1].id, "k-2");
        assert_eq!(questions[1].title, "second");
        for q in &questions {
            assert_eq!(q.difficulty, QuestionDifficulty::Easy);
            assert_eq!(q.time, "10 min");
            assert!(!q.completed);
            assert!(q.has_video);
        }
    }

    #[test]
    fn builtin_tree_is_deterministic() {
        assert_eq!(Curriculum::builtin(), Curriculum::builtin());
    }

    #[test]
    fn builtin_tree_satisfies_invariants() {
        assert_eq!(curriculum().check_invariants(), Ok(()));
    }

    #[test]
    fn builtin_tree_shape() {
        let c = curriculum();
        let ids: Vec<&str> = c.domains().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["maths", "aptitude", "dsa"]);
        for domain in c.domains() {
            let levels: Vec<DifficultyId> = domain.difficulties.iter().map(|d| d.id).collect();
            assert_eq!(levels, DifficultyId::ALL.to_vec());
        }
        assert_eq!(c.questions().count(), 300);
    }

    #[test]
    fn every_domain_round_trips_through_find_domain() {
        let c = curriculum();
        for domain in c.domains() {
            let found = c.find_domain(&domain.id).expect("domain should resolve");
            assert!(std::ptr::eq(found, domain));
        }
    }

    #[test]
    fn topics_for_difficulty_are_the_owned_sequence_in_order() {
        let c = curriculum();
        for domain in c.domains() {
            for difficulty in &domain.difficulties {
                let topics = c.find_topics_for_difficulty(&domain.id, difficulty.id.as_str());
                assert_eq!(topics, difficulty.topics.as_slice());
            }
        }
    }

    #[test]
    fn dsa_beginner_arrays_has_three_questions_in_order() {
        let c = curriculum();
        let ids: Vec<&str> = c
            .find_questions_for_topic("dsa", "beginner", "arrays")
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, vec!["dsa-beg-arr-1", "dsa-beg-arr-2", "dsa-beg-arr-3"]);
    }

    #[rstest]
    #[case("maths", "beginner", "nonexistent-topic")]
    #[case("unknown-domain", "beginner", "arrays")]
    #[case("dsa", "expert", "arrays")]
    #[case("", "", "")]
    #[case("DSA", "beginner", "arrays")]
    fn unknown_triples_resolve_to_nothing(
        #[case] domain: &str,
        #[case] difficulty: &str,
        #[case] topic: &str,
    ) {
        let c = curriculum();
        assert!(c.find_topic(domain, difficulty, topic).is_none());
        assert!(c.find_questions_for_topic(domain, difficulty, topic).is_empty());
    }

    #[rstest]
    #[case("unknown-domain", "beginner")]
    #[case("maths", "Beginner")]
    #[case("maths", "")]
    fn unknown_difficulty_pairs_resolve_to_nothing(#[case] domain: &str, #[case] difficulty: &str) {
        let c = curriculum();
        assert!(c.find_difficulty(domain, difficulty).is_none());
        assert!(c.find_topics_for_difficulty(domain, difficulty).is_empty());
    }

    #[test]
    fn find_question_goes_through_parent_chain() {
        let c = curriculum();
        assert!(c.find_question("dsa", "beginner", "arrays", "dsa-beg-arr-2").is_some());
        // Right id, wrong parent.
        assert!(c.find_question("dsa", "beginner", "strings", "dsa-beg-arr-2").is_none());
    }

    #[test]
    fn locate_question_reports_lineage() {
        let c = curriculum();
        let loc = c.locate_question("dsa-beg-arr-3").expect("question exists");
        assert_eq!(loc.domain.id, "dsa");
        assert_eq!(loc.difficulty.id, DifficultyId::Beginner);
        assert_eq!(loc.topic.id, "arrays");
        assert!(c.locate_question("dsa-beg-arr-4").is_none());
    }

    #[test]
    fn duplicate_question_ids_are_detected() {
        let topic = |id: &str| Topic {
            id: id.to_string(),
            name: id.to_string(),
            questions: create_questions("same", &["a"]),
        };
        let c = Curriculum::from_domains(vec![Domain {
            id: "d".into(),
            name: "D".into(),
            short_name: "D".into(),
            difficulties: vec![DifficultyLevel {
                id: DifficultyId::Beginner,
                name: "Beginner".into(),
                topics: vec![topic("t1"), topic("t2")],
            }],
        }]);
        assert_eq!(
            c.check_invariants(),
            Err(CurriculumError::DuplicateQuestion("same-1".into()))
        );
    }

    #[test]
    fn difficulty_ids_parse_and_reject() {
        assert_eq!("advanced".parse::<DifficultyId>(), Ok(DifficultyId::Advanced));
        assert!("Advanced".parse::<DifficultyId>().is_err());
    }
}
