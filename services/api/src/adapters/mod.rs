pub mod assistant_llm;
pub mod db;

pub use assistant_llm::OpenAiAssistantAdapter;
pub use db::DbAdapter;
