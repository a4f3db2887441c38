//! OpenAI backend implementation.

use super::config::BackendConfig;
use super::convert;
use async_openai::{
    Client,
    config::OpenAIConfig as AsyncOpenAIConfig,
    types::{
        AudioInput, ChatCompletionToolChoiceOption, CreateChatCompletionRequestArgs,
        CreateSpeechRequestArgs, CreateTranscriptionRequestArgs, SpeechModel, Voice,
    },
};
use async_trait::async_trait;
use voxgate_core::{AudioClip, ChatPrompt, ChatReply, GatewayError, ModelBackend, Result};

/// OpenAI-backed implementation of all three relayed capabilities.
pub struct OpenAIBackend {
    client: Client<AsyncOpenAIConfig>,
    config: BackendConfig,
}

impl OpenAIBackend {
    /// Create a new backend. The API key must already be resolved; see
    /// [`crate::credentials::resolve_api_key`].
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(GatewayError::Config("API key is empty".to_string()));
        }

        let mut openai_config = AsyncOpenAIConfig::new().with_api_key(&config.api_key);
        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        Ok(Self { client: Client::with_config(openai_config), config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn speech_model(&self) -> SpeechModel {
        match self.config.speech_model.as_str() {
            "tts-1-hd" => SpeechModel::Tts1Hd,
            _ => SpeechModel::Tts1,
        }
    }

    fn speech_voice(&self) -> Voice {
        match self.config.voice.as_str() {
            "alloy" => Voice::Alloy,
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Onyx,
        }
    }
}

#[async_trait]
impl ModelBackend for OpenAIBackend {
    fn model_name(&self) -> &str {
        &self.config.chat_model
    }

    async fn chat(&self, prompt: ChatPrompt) -> Result<ChatReply> {
        let messages: Vec<_> = prompt.turns.iter().map(convert::turn_to_message).collect();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.chat_model)
            .messages(messages)
            .tools(convert::catalog_tools())
            .tool_choice(ChatCompletionToolChoiceOption::Auto)
            .temperature(prompt.temperature.unwrap_or(self.config.temperature))
            .max_tokens(prompt.max_output_tokens.unwrap_or(self.config.max_output_tokens))
            .build()
            .map_err(|e| GatewayError::Model(format!("failed to build request: {e}")))?;

        tracing::debug!(model = %self.config.chat_model, turns = prompt.turns.len(), "submitting chat turn");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GatewayError::Model(format!("OpenAI API error: {e}")))?;

        convert::reply_from_response(&response)
    }

    async fn transcribe(&self, clip: AudioClip) -> Result<String> {
        tracing::debug!(bytes = clip.bytes.len(), filename = %clip.filename, "transcribing audio clip");

        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(clip.filename, clip.bytes))
            .model(&self.config.transcription_model)
            .language(&self.config.transcription_language)
            .build()
            .map_err(|e| GatewayError::Transcription(format!("failed to build request: {e}")))?;

        let transcription = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| GatewayError::Transcription(format!("OpenAI API error: {e}")))?;

        Ok(transcription.text.trim().to_string())
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let request = CreateSpeechRequestArgs::default()
            .model(self.speech_model())
            .voice(self.speech_voice())
            .input(text)
            .build()
            .map_err(|e| GatewayError::Synthesis(format!("failed to build request: {e}")))?;

        let response = self
            .client
            .audio()
            .speech(request)
            .await
            .map_err(|e| GatewayError::Synthesis(format!("OpenAI API error: {e}")))?;

        Ok(response.bytes.to_vec())
    }

    async fn probe(&self) -> Result<()> {
        self.client
            .models()
            .list()
            .await
            .map_err(|e| GatewayError::Model(format!("OpenAI API unreachable: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_key() {
        let err = OpenAIBackend::new(BackendConfig::default()).err().unwrap();
        assert_eq!(err.code(), "config");
    }

    #[test]
    fn test_model_name_reports_chat_model() {
        let backend =
            OpenAIBackend::new(BackendConfig::new("sk-test").with_chat_model("gpt-4o-mini"))
                .unwrap();
        assert_eq!(backend.model_name(), "gpt-4o-mini");
    }

    #[test]
    fn test_voice_mapping_falls_back_to_onyx() {
        let backend = OpenAIBackend::new(BackendConfig::new("sk-test").with_voice("growl")).unwrap();
        assert_eq!(backend.speech_voice(), Voice::Onyx);

        let backend = OpenAIBackend::new(BackendConfig::new("sk-test").with_voice("nova")).unwrap();
        assert_eq!(backend.speech_voice(), Voice::Nova);
    }
}
