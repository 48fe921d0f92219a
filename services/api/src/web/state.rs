//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use learnsolve_core::curriculum::Curriculum;
use learnsolve_core::ports::{DatabaseService, DoubtAssistantService};
use learnsolve_core::quiz::QuizBank;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// `curriculum` and `quizzes` are read-only for the lifetime of the process.
/// Every mutable record lives behind `db`; handlers never cache it here.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseService>,
    pub assistant: Arc<dyn DoubtAssistantService>,
    pub curriculum: Arc<Curriculum>,
    pub quizzes: Arc<QuizBank>,
    pub config: Arc<Config>,
}
