//! Oracle call parameters for the assistant flow.

use std::time::Duration;

/// Parameters for the main chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
    /// `None` leaves the call bounded only by the transport.
    pub timeout: Option<Duration>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "chatgpt-4o-latest".to_string(),
            temperature: 1.0,
            timeout: None,
        }
    }
}

/// Parameters for a small utility call (detection, extraction).
#[derive(Debug, Clone, PartialEq)]
pub struct UtilitySettings {
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl UtilitySettings {
    pub fn detection_default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 300,
            timeout: Duration::from_secs(20),
        }
    }

    pub fn extraction_default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            ..Self::detection_default()
        }
    }
}

/// All oracle parameters used by one assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    pub chat: ChatSettings,
    pub detection: UtilitySettings,
    pub extraction: UtilitySettings,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            chat: ChatSettings::default(),
            detection: UtilitySettings::detection_default(),
            extraction: UtilitySettings::extraction_default(),
        }
    }
}
