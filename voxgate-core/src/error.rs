#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Synthesis error: {0}")]
    Synthesis(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GatewayError {
    /// Stable machine-readable code for logging and observability.
    ///
    /// The HTTP surface folds every failure into a success-shaped envelope,
    /// so internal consumers match on this code instead of the display text.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "config",
            GatewayError::Model(_) => "model",
            GatewayError::Transcription(_) => "transcription",
            GatewayError::Synthesis(_) => "synthesis",
            GatewayError::MalformedResponse(_) => "malformed_response",
            GatewayError::Io(_) => "io",
            GatewayError::Serde(_) => "serde",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Model("upstream unavailable".to_string());
        assert_eq!(err.to_string(), "Model error: upstream unavailable");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GatewayError = io_err.into();
        assert!(matches!(err, GatewayError::Io(_)));
        assert_eq!(err.code(), "io");
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(GatewayError::Config("x".into()).code(), "config");
        assert_eq!(GatewayError::MalformedResponse("x".into()).code(), "malformed_response");
        assert_eq!(GatewayError::Transcription("x".into()).code(), "transcription");
        assert_eq!(GatewayError::Synthesis("x".into()).code(), "synthesis");
    }
}
