//! # voxgate-core
//!
//! Core types for the Voxgate browser-agent gateway:
//!
//! - [`Turn`] / [`Part`] - single-turn conversation content
//! - [`BrowserTool`] / [`ToolArgs`] - the fixed eight-tool catalog and
//!   typed argument validation
//! - [`ChatReply`] / [`ToolInvocation`] - the uniform reply envelope
//! - [`ModelBackend`] - the remote model collaborator trait
//! - [`GatewayError`] / [`Result`] - unified error handling
//!
//! The gateway is deliberately memoryless: every chat call assembles one
//! system turn and one user turn, forwards them with the full tool catalog,
//! and discards everything when the response is sent.

pub mod backend;
pub mod conversation;
pub mod envelope;
pub mod error;
pub mod tool;
pub mod types;

pub use backend::{AudioClip, ModelBackend};
pub use conversation::{DEFAULT_PERSONA, assemble_turns, strip_data_uri};
pub use envelope::{
    ChatPrompt, ChatReply, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, ToolInvocation,
};
pub use error::{GatewayError, Result};
pub use tool::{BrowserTool, ScrollDirection, ToolArgs, catalog};
pub use types::{Part, Role, Turn};
