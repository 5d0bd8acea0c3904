//! Assembly of the system instruction and human message for a chat turn.

use crate::domain::conversation::Transcript;

use super::templates::PromptTemplates;

/// The two messages sent to the oracle for one assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// Role, goal, backstory, task and output blocks under their headers.
    pub system_instruction: String,
    /// The system instruction again, followed by the transcript and the
    /// new human turn, ending with an open `Ai:` line.
    pub human_message: String,
}

/// Builds prompts from a template bundle. Pure; holds no state.
#[derive(Debug, Clone, Copy)]
pub struct PromptComposer {
    templates: &'static PromptTemplates,
}

impl PromptComposer {
    pub fn new(templates: &'static PromptTemplates) -> Self {
        Self { templates }
    }

    /// Concatenates the template blocks with their section headers.
    ///
    /// The backstory and task blocks are joined to the following header
    /// without a separating newline; the blocks themselves end in one.
    pub fn system_instruction(&self) -> String {
        let t = self.templates;
        let h = &t.headers;
        format!(
            "{}\n\n{}\n{}\n\n{}\n{}{}\n{}{}\n{} ",
            t.role,
            h.objective,
            t.goal,
            h.context,
            t.backstory,
            h.task,
            t.task_description,
            h.output,
            t.expected_output,
        )
    }

    /// Composes both messages for `prompt` given the prior transcript.
    pub fn compose(&self, transcript: &Transcript, prompt: &str) -> ComposedPrompt {
        let system_instruction = self.system_instruction();
        let human_message = format!(
            "{}\n\n{}\nHuman: {}\nAi:",
            system_instruction,
            transcript.render(),
            prompt
        );
        ComposedPrompt {
            system_instruction,
            human_message,
        }
    }
}
