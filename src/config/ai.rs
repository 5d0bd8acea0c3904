//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::handlers::assistant::{AssistantSettings, ChatSettings, UtilitySettings};

/// OpenAI configuration for the chat, detection and extraction calls
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model for the main chat completion
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Sampling temperature for the chat completion
    #[serde(default = "default_chat_temperature")]
    pub chat_temperature: f32,

    /// Chat completion timeout in seconds. Absent means no timeout.
    pub chat_timeout_secs: Option<u64>,

    /// Model for language detection and product extraction
    #[serde(default = "default_utility_model")]
    pub utility_model: String,

    /// Token cap for detection and extraction replies
    #[serde(default = "default_utility_max_tokens")]
    pub utility_max_tokens: u32,

    /// Language detection timeout in seconds
    #[serde(default = "default_detection_timeout")]
    pub detection_timeout_secs: u64,

    /// Product extraction timeout in seconds
    #[serde(default = "default_extraction_timeout")]
    pub extraction_timeout_secs: u64,
}

impl AiConfig {
    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Per-call oracle parameters for the assistant flow
    pub fn assistant_settings(&self) -> AssistantSettings {
        let utility = |timeout_secs| UtilitySettings {
            model: self.utility_model.clone(),
            max_tokens: self.utility_max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        };

        AssistantSettings {
            chat: ChatSettings {
                model: self.chat_model.clone(),
                temperature: self.chat_temperature,
                timeout: self.chat_timeout_secs.map(Duration::from_secs),
            },
            detection: utility(self.detection_timeout_secs),
            extraction: utility(self.extraction_timeout_secs),
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if !(0.0..=2.0).contains(&self.chat_temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.chat_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidAiTimeout("chat"));
        }
        if self.detection_timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout("detection"));
        }
        if self.extraction_timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout("extraction"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: default_base_url(),
            chat_model: default_chat_model(),
            chat_temperature: default_chat_temperature(),
            chat_timeout_secs: None,
            utility_model: default_utility_model(),
            utility_max_tokens: default_utility_max_tokens(),
            detection_timeout_secs: default_detection_timeout(),
            extraction_timeout_secs: default_extraction_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "chatgpt-4o-latest".to_string()
}

fn default_chat_temperature() -> f32 {
    1.0
}

fn default_utility_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_utility_max_tokens() -> u32 {
    300
}

fn default_detection_timeout() -> u64 {
    20
}

fn default_extraction_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new("sk-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_produce_default_assistant_settings() {
        assert_eq!(
            AiConfig::default().assistant_settings(),
            AssistantSettings::default()
        );
    }

    #[test]
    fn test_chat_timeout_is_optional() {
        let config = AiConfig {
            chat_timeout_secs: Some(90),
            ..configured()
        };
        assert_eq!(
            config.assistant_settings().chat.timeout,
            Some(Duration::from_secs(90))
        );
    }

    #[test]
    fn test_validation_missing_key() {
        assert!(matches!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        ));

        let config = AiConfig {
            openai_api_key: Some(Secret::new(String::new())),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_temperature() {
        let config = AiConfig {
            chat_temperature: 3.5,
            ..configured()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTemperature)));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = AiConfig {
            detection_timeout_secs: 0,
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(configured().validate().is_ok());
    }
}
