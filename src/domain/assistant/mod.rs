//! Assistant domain module.
//!
//! Pure building blocks of an assistant turn: prompt decoding, language
//! tags, template bundles, prompt composition and reply analysis.

mod analyzer;
mod escape;
mod language;
mod prompt;
pub mod templates;

pub use analyzer::{CofeprisStatus, FormattedAnswer, ReplyAnalysis, ResponseAnalyzer};
pub use escape::{decode_escapes, EscapeError};
pub use language::LanguageTag;
pub use prompt::{ComposedPrompt, PromptComposer};
pub use templates::{PromptTemplates, SectionHeaders};
