//! The chat relay endpoint.

use super::GatewayController;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use voxgate_core::{ChatPrompt, ChatReply, assemble_turns};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatApiRequest {
    pub text: String,
    /// Base64-encoded viewport screenshot, with or without a data-URI prefix.
    #[serde(default)]
    pub vision_base64: Option<String>,
    /// Persona override; empty or absent means the default persona.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// `POST /api/chat` — relay one turn to the model.
///
/// Always answers HTTP 200: failures fold into the envelope with an error
/// description in `text` and no tool calls. Callers must not treat a
/// non-empty `text` as proof of success.
pub async fn chat(
    State(controller): State<GatewayController>,
    Json(req): Json<ChatApiRequest>,
) -> Json<ChatReply> {
    let persona = req
        .system_prompt
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| controller.persona());

    let turns = assemble_turns(persona, &req.text, req.vision_base64.as_deref());

    match controller.backend().chat(ChatPrompt::new(turns)).await {
        Ok(reply) => {
            if let Some(call) = reply.tool_calls.first() {
                tracing::info!(tool = %call.name, "chat turn produced a tool call");
            }
            Json(reply)
        }
        Err(e) => {
            tracing::warn!(code = e.code(), error = %e, "chat relay failed");
            Json(ChatReply::text_only(format!("Ошибка: {e}")))
        }
    }
}
