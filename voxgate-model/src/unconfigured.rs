//! Backend stub installed when no credential resolves at startup.

use async_trait::async_trait;
use voxgate_core::{AudioClip, ChatPrompt, ChatReply, GatewayError, ModelBackend, Result};

/// A backend that reports a configuration error on every call.
///
/// Keeps the process serving when no API key resolves at startup: the error
/// surfaces per request through the normal envelopes instead of aborting the
/// process, while backend construction stays explicit at bootstrap.
pub struct UnconfiguredBackend {
    model_name: String,
    reason: String,
}

impl UnconfiguredBackend {
    pub fn new(model_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { model_name: model_name.into(), reason: reason.into() }
    }

    fn error(&self) -> GatewayError {
        GatewayError::Config(self.reason.clone())
    }
}

#[async_trait]
impl ModelBackend for UnconfiguredBackend {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn chat(&self, _prompt: ChatPrompt) -> Result<ChatReply> {
        Err(self.error())
    }

    async fn transcribe(&self, _clip: AudioClip) -> Result<String> {
        Err(self.error())
    }

    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>> {
        Err(self.error())
    }

    async fn probe(&self) -> Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_call_reports_config_error() {
        let backend = UnconfiguredBackend::new("gpt-4o", "API key not configured");
        assert_eq!(backend.model_name(), "gpt-4o");
        assert_eq!(backend.chat(ChatPrompt::new(Vec::new())).await.unwrap_err().code(), "config");
        assert_eq!(
            backend
                .transcribe(AudioClip::new("a.wav", "audio/wav", Vec::new()))
                .await
                .unwrap_err()
                .code(),
            "config"
        );
        assert_eq!(backend.synthesize("привет").await.unwrap_err().code(), "config");
        assert_eq!(backend.probe().await.unwrap_err().code(), "config");
    }
}
