//! # voxgate-model
//!
//! OpenAI backend for the Voxgate gateway. One client covers all three
//! relayed capabilities:
//!
//! - [`OpenAIBackend::chat`] - tool-calling chat completion with optional
//!   viewport screenshots (low-detail vision)
//! - [`OpenAIBackend::transcribe`] - Whisper transcription with a fixed
//!   language hint
//! - [`OpenAIBackend::synthesize`] - speech synthesis with a fixed voice
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voxgate_model::{BackendConfig, OpenAIBackend, resolve_api_key};
//!
//! let key = resolve_api_key().unwrap();
//! let backend = OpenAIBackend::new(BackendConfig::new(key)).unwrap();
//! ```

pub mod credentials;
pub mod openai;
pub mod unconfigured;

pub use credentials::{API_KEY_ENV, SETTINGS_KEY, resolve_api_key, settings_path};
pub use openai::{BackendConfig, OpenAIBackend};
pub use unconfigured::UnconfiguredBackend;
