pub mod assistant;
pub mod curriculum;
pub mod doubts;
pub mod instructor;
pub mod middleware;
pub mod progress;
pub mod quizzes;
pub mod rest;
pub mod router;
pub mod state;
pub mod videos;

// Re-export what the server binary needs to assemble the application.
pub use rest::ApiDoc;
pub use router::{build_router, cors_layer};
