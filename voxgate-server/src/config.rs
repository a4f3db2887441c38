use std::{sync::Arc, time::Duration};
use voxgate_core::{DEFAULT_PERSONA, ModelBackend};

/// Security configuration for the gateway server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 10MB, screenshots are large)
    pub max_body_size: usize,
    /// Request timeout duration (default: 60 seconds, remote model calls are slow)
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Configuration for the gateway server.
///
/// The backend is constructed once at bootstrap and threaded into every
/// handler through this config; handlers never build clients themselves.
#[derive(Clone)]
pub struct ServerConfig {
    pub backend: Arc<dyn ModelBackend>,
    /// Default persona used when a request carries no system prompt override.
    pub persona: String,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self { backend, persona: DEFAULT_PERSONA.to_string(), security: SecurityConfig::default() }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use voxgate_core::{AudioClip, ChatPrompt, ChatReply, Result};

    struct NullBackend;

    #[async_trait]
    impl ModelBackend for NullBackend {
        fn model_name(&self) -> &str {
            "null"
        }
        async fn chat(&self, _prompt: ChatPrompt) -> Result<ChatReply> {
            Ok(ChatReply::default())
        }
        async fn transcribe(&self, _clip: AudioClip) -> Result<String> {
            Ok(String::new())
        }
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
        async fn probe(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_security_defaults() {
        let security = SecurityConfig::default();
        assert!(security.allowed_origins.is_empty());
        assert_eq!(security.max_body_size, 10 * 1024 * 1024);
        assert_eq!(security.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::new(Arc::new(NullBackend))
            .with_persona("test persona")
            .with_allowed_origins(vec!["https://example.com".to_string()])
            .with_max_body_size(1024)
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.persona, "test persona");
        assert_eq!(config.security.allowed_origins, vec!["https://example.com"]);
        assert_eq!(config.security.max_body_size, 1024);
        assert_eq!(config.security.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_persona_applied() {
        let config = ServerConfig::new(Arc::new(NullBackend));
        assert_eq!(config.persona, voxgate_core::DEFAULT_PERSONA);
    }
}
