//! services/api/src/adapters/assistant_llm.rs
//!
//! This module contains the adapter for the doubt-explaining LLM.
//! It implements the `DoubtAssistantService` port from the core crate.

const SYSTEM_INSTRUCTIONS: &str = r#"You are a patient tutor on a practice platform for mathematics, aptitude and data structures & algorithms.

A learner is stuck on a practice problem or a video explanation and asks you about it.

The context you receive can include:
- PROBLEM: where the problem sits in the curriculum (domain, level, topic) and its title.
- VIDEO: the title and description of the video the learner was watching.

How to answer:
- Explain the idea step by step, starting from what the learner most likely misunderstood.
- Prefer a small worked example over abstract definitions.
- For algorithm questions, mention time and space complexity when it helps.
- Do not just hand over a final answer to the exact problem; guide the learner to it.
- Keep it short enough to read in under a minute. Use plain text; short lists are fine."#;

const USER_INPUT_TEMPLATE: &str = r#"CONTEXT:
---
{context}
---

LEARNER'S DOUBT:
{question}"#;

use async_openai::{
    config::OpenAIConfig, error::OpenAIError, types::responses::CreateResponseArgs, Client,
};
use async_trait::async_trait;
use learnsolve_core::ports::{DoubtAssistantService, PortError, PortResult};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `DoubtAssistantService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiAssistantAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiAssistantAdapter {
    /// Creates a new `OpenAiAssistantAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

/// Fills the user prompt. An empty context is sent as "(none)".
fn render_input(question: &str, context: &str) -> String {
    let context = if context.trim().is_empty() { "(none)" } else { context };
    USER_INPUT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}

//=========================================================================================
// `DoubtAssistantService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DoubtAssistantService for OpenAiAssistantAdapter {
    async fn explain(&self, question: &str, context: &str) -> PortResult<String> {
        debug!(model = %self.model, "Requesting doubt explanation");

        let request = CreateResponseArgs::default()
            .model(&self.model)
            .instructions(SYSTEM_INSTRUCTIONS)
            .input(render_input(question, context))
            .max_output_tokens(800u32)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .responses()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let answer = response.output_text().unwrap_or_default().trim().to_string();
        if answer.is_empty() {
            return Err(PortError::Unexpected("assistant returned an empty answer".to_string()));
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_embeds_question_and_context() {
        let input = render_input("why O(n)?", "PROBLEM: Two Sum");
        assert!(input.contains("PROBLEM: Two Sum"));
        assert!(input.ends_with("why O(n)?"));
    }

    #[test]
    fn blank_context_is_marked() {
        assert!(render_input("q", "  ").contains("(none)"));
    }
}
