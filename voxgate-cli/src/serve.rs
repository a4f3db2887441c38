use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use voxgate_core::ModelBackend;
use voxgate_model::{BackendConfig, OpenAIBackend, UnconfiguredBackend, resolve_api_key};
use voxgate_server::{ServerConfig, create_app};

/// Build the backend once at startup and serve until interrupted.
///
/// A missing credential does not abort startup: an [`UnconfiguredBackend`]
/// is installed instead and every call reports the configuration error
/// through the normal response envelopes, so the key can be added to the
/// settings file and the process restarted without the browser shell ever
/// seeing a dead port.
pub async fn run_serve(
    host: &str,
    port: u16,
    model: &str,
    persona_file: Option<&Path>,
) -> Result<()> {
    let backend: Arc<dyn ModelBackend> = match resolve_api_key() {
        Ok(key) => {
            let backend = OpenAIBackend::new(BackendConfig::new(key).with_chat_model(model))?;
            tracing::info!(model, "OpenAI backend configured");
            Arc::new(backend)
        }
        Err(e) => {
            tracing::warn!(error = %e, "starting without a usable credential");
            Arc::new(UnconfiguredBackend::new(model, e.to_string()))
        }
    };

    let mut config = ServerConfig::new(backend);
    if let Some(path) = persona_file {
        config = config.with_persona(load_persona(path)?);
        tracing::info!(path = %path.display(), "persona loaded from file");
    }
    let app = create_app(config);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "voxgate listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Read a replacement persona from a file.
///
/// Surrounding whitespace is dropped; an empty file is rejected rather than
/// silently blanking the system turn.
fn load_persona(path: &Path) -> Result<String> {
    let persona = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read persona file {}", path.display()))?;
    let persona = persona.trim();
    if persona.is_empty() {
        anyhow::bail!("persona file {} is empty", path.display());
    }
    Ok(persona.to_string())
}
