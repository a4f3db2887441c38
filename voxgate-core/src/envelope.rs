//! The uniform reply envelope and chat prompt shape.

use crate::types::Turn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// One structured browser instruction emitted by the model.
///
/// `args` is the validated argument object, kept as JSON for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    pub args: serde_json::Value,
}

/// Uniform `{text, tool_calls}` envelope returned to the browser agent.
///
/// By contract the envelope carries at most one tool call per turn: browser
/// actions are issued one at a time, and any additional calls a model
/// returns are dropped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub tool_calls: Vec<ToolInvocation>,
}

impl ChatReply {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self { text: text.into(), tool_calls: Vec::new() }
    }

    pub fn with_tool_call(text: impl Into<String>, invocation: ToolInvocation) -> Self {
        Self { text: text.into(), tool_calls: vec![invocation] }
    }
}

/// A fully assembled single-turn prompt.
///
/// Sampling parameters are per-prompt overrides; a prompt that leaves them
/// unset takes the backend's configured values.
#[derive(Debug, Clone)]
pub struct ChatPrompt {
    pub turns: Vec<Turn>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl ChatPrompt {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns, temperature: None, max_output_tokens: None }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}
