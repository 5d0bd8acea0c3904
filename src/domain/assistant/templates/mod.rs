//! Per-language prompt template bundles.
//!
//! Each bundle holds the five static blocks that describe the assistant
//! (role, goal, backstory, task, expected output) plus the localized
//! section headers used to stitch them together. Bundles are immutable
//! statics selected by language code.

mod en;
mod es;

use super::language::LanguageTag;

/// Localized section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeaders {
    pub objective: &'static str,
    pub context: &'static str,
    pub task: &'static str,
    pub output: &'static str,
}

/// The full set of static text used to build a system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplates {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub task_description: &'static str,
    pub expected_output: &'static str,
    pub headers: SectionHeaders,
}

pub static ENGLISH: PromptTemplates = PromptTemplates {
    role: en::ROLE,
    goal: en::GOAL,
    backstory: en::BACKSTORY,
    task_description: en::TASK_DESCRIPTION,
    expected_output: en::EXPECTED_OUTPUT,
    headers: SectionHeaders {
        objective: "Agent's objective:",
        context: "Agent's context:",
        task: "Agent's task:",
        output: "Agent's output:",
    },
};

pub static SPANISH: PromptTemplates = PromptTemplates {
    role: es::ROLE,
    goal: es::GOAL,
    backstory: es::BACKSTORY,
    task_description: es::TASK_DESCRIPTION,
    expected_output: es::EXPECTED_OUTPUT,
    headers: SectionHeaders {
        objective: "Objetivo del agente:",
        context: "Contexto del agente:",
        task: "Tarea del agente:",
        output: "Salida del agente:",
    },
};

impl PromptTemplates {
    /// Selects the bundle for a detected language.
    ///
    /// Only `en` selects English; every other tag, including unexpected
    /// oracle output, falls back to Spanish.
    pub fn for_language(lang: &LanguageTag) -> &'static PromptTemplates {
        if lang.is_english() {
            &ENGLISH
        } else {
            &SPANISH
        }
    }
}
