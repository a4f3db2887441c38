use crate::envelope::{ChatPrompt, ChatReply};
use crate::error::Result;
use async_trait::async_trait;

/// An audio blob uploaded for transcription.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { filename: filename.into(), mime_type: mime_type.into(), bytes }
    }
}

/// The remote model collaborator behind the gateway.
///
/// One backend is constructed during process bootstrap and threaded into
/// every handler through server state; there is no hidden global and no
/// lazy initialization to race on. All methods are per-call and stateless.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Chat model identifier, reported by the health endpoint.
    fn model_name(&self) -> &str;

    /// Submit a single-turn conversation and normalize the reply.
    async fn chat(&self, prompt: ChatPrompt) -> Result<ChatReply>;

    /// Transcribe an audio clip to plain text.
    async fn transcribe(&self, clip: AudioClip) -> Result<String>;

    /// Synthesize speech for the given text, returning MP3 bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;

    /// Cheap reachability check against the remote endpoint.
    async fn probe(&self) -> Result<()>;
}
