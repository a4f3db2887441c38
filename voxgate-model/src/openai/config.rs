//! Configuration for the OpenAI backend.

use serde::{Deserialize, Serialize};
use voxgate_core::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE};

/// Configuration for the OpenAI backend.
///
/// Carries the model names for all three relayed capabilities plus the
/// documented sampling defaults (temperature 0.7, output cap 512 tokens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// OpenAI API key.
    pub api_key: String,
    /// Chat model name (e.g. "gpt-4o").
    pub chat_model: String,
    /// Transcription model name.
    pub transcription_model: String,
    /// Speech synthesis model name.
    pub speech_model: String,
    /// Synthesis voice identifier. Not exposed to callers of the gateway.
    pub voice: String,
    /// Fixed language hint for transcription. The relay does not negotiate
    /// the spoken language per request.
    pub transcription_language: String,
    /// Optional custom base URL for OpenAI-compatible APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature for chat.
    pub temperature: f32,
    /// Output token cap for chat.
    pub max_output_tokens: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_model: "gpt-4o".to_string(),
            transcription_model: "whisper-1".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "onyx".to_string(),
            transcription_language: "ru".to_string(),
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl BackendConfig {
    /// Create a config with the given API key and default models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Default::default() }
    }

    pub fn with_chat_model(mut self, chat_model: impl Into<String>) -> Self {
        self.chat_model = chat_model.into();
        self
    }

    pub fn with_transcription_model(mut self, model: impl Into<String>) -> Self {
        self.transcription_model = model.into();
        self
    }

    pub fn with_speech_model(mut self, model: impl Into<String>) -> Self {
        self.speech_model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_transcription_language(mut self, language: impl Into<String>) -> Self {
        self.transcription_language = language.into();
        self
    }

    /// Set a custom API base URL (e.g. for an OpenAI-compatible API).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}
