//! Speech-to-text and text-to-speech relay endpoints.

use super::GatewayController;
use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use voxgate_core::AudioClip;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

/// `POST /api/stt` — transcribe an uploaded audio blob.
///
/// Always answers HTTP 200; any failure (missing upload, remote error)
/// yields an empty transcription.
pub async fn transcribe(
    State(controller): State<GatewayController>,
    multipart: Multipart,
) -> Json<TranscriptionResponse> {
    let clip = match read_audio_clip(multipart).await {
        Some(clip) => clip,
        None => {
            tracing::warn!("stt request carried no audio field");
            return Json(TranscriptionResponse { text: String::new() });
        }
    };

    tracing::debug!(bytes = clip.bytes.len(), "received audio upload");

    match controller.backend().transcribe(clip).await {
        Ok(text) => Json(TranscriptionResponse { text }),
        Err(e) => {
            tracing::warn!(code = e.code(), error = %e, "transcription relay failed");
            Json(TranscriptionResponse { text: String::new() })
        }
    }
}

/// Pull the audio blob out of the multipart body.
///
/// Prefers the field named `audio`; otherwise the first field with content
/// is used, which tolerates sloppy clients.
async fn read_audio_clip(mut multipart: Multipart) -> Option<AudioClip> {
    let mut fallback: Option<AudioClip> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or("clip.wav").to_string();
        let mime_type = field.content_type().unwrap_or("audio/wav").to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) => continue,
        };
        if bytes.is_empty() {
            continue;
        }

        let clip = AudioClip::new(filename, mime_type, bytes);
        if name == "audio" {
            return Some(clip);
        }
        fallback.get_or_insert(clip);
    }

    fallback
}

#[derive(Debug, Deserialize)]
pub struct SynthesisParams {
    pub text: String,
}

/// `GET /api/tts?text=...` — synthesize speech.
///
/// Returns raw `audio/mpeg` bytes on success, or a JSON `{error}` body
/// (still HTTP 200) on failure.
pub async fn synthesize(
    State(controller): State<GatewayController>,
    Query(params): Query<SynthesisParams>,
) -> Response {
    match controller.backend().synthesize(&params.text).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        Err(e) => {
            tracing::warn!(code = e.code(), error = %e, "synthesis relay failed");
            Json(serde_json::json!({ "error": e.to_string() })).into_response()
        }
    }
}
