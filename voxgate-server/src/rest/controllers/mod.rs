pub mod audio;
pub mod chat;
pub mod health;

use crate::ServerConfig;
use std::sync::Arc;
use voxgate_core::ModelBackend;

/// Shared handler state: the injected backend and the default persona.
#[derive(Clone)]
pub struct GatewayController {
    backend: Arc<dyn ModelBackend>,
    persona: String,
}

impl GatewayController {
    pub fn new(config: &ServerConfig) -> Self {
        Self { backend: config.backend.clone(), persona: config.persona.clone() }
    }

    pub fn backend(&self) -> &Arc<dyn ModelBackend> {
        &self.backend
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }
}
