mod catalog;
pub mod curriculum;
pub mod domain;
pub mod media;
pub mod ports;
pub mod quiz;
pub mod search;
pub mod stats;
pub mod sync;

pub use curriculum::{
    create_questions, Curriculum, CurriculumError, DifficultyId, DifficultyLevel, Domain, Question,
    QuestionDifficulty, QuestionLocation, Topic,
};
pub use domain::{
    Doubt, DoubtFilter, DoubtStatus, NewDoubt, NewQuizAttempt, NewVideo, ProgressUpdate,
    QuizAttempt, UserProgress, Video, VideoFilter,
};
pub use media::VideoSource;
pub use ports::{DatabaseService, DoubtAssistantService, PortError, PortResult};
pub use quiz::{Quiz, QuizBank, QuizResult};
