//! Language tags reported by the language detector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected language code, normally `en` or `es`.
///
/// The tag is whatever the oracle answered, trimmed of whitespace, quotes
/// and trailing punctuation. It is not validated; callers must tolerate
/// values other than `en` and `es`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub const ENGLISH: &'static str = "en";
    pub const SPANISH: &'static str = "es";

    /// Normalizes a raw oracle reply into a tag.
    pub fn from_reply(raw: &str) -> Self {
        let trimmed = raw
            .trim()
            .trim_matches(|c: char| matches!(c, '\'' | '"' | '`' | '.') || c.is_whitespace());
        Self(trimmed.to_string())
    }

    pub fn english() -> Self {
        Self(Self::ENGLISH.to_string())
    }

    pub fn spanish() -> Self {
        Self(Self::SPANISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
