//! The fixed browser tool catalog and typed argument validation.
//!
//! The catalog is static: all eight descriptors are sent on every chat call,
//! regardless of conversation content. The interface guarantees at most one
//! actionable instruction per turn, so the provider adapter keeps only the
//! first tool call a model returns.

use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The eight browser actions a model may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserTool {
    OpenWebsite,
    GoogleSearch,
    SearchYoutube,
    ClickText,
    TypeText,
    Scroll,
    GoBack,
    GoForward,
}

impl BrowserTool {
    pub const ALL: [BrowserTool; 8] = [
        BrowserTool::OpenWebsite,
        BrowserTool::GoogleSearch,
        BrowserTool::SearchYoutube,
        BrowserTool::ClickText,
        BrowserTool::TypeText,
        BrowserTool::Scroll,
        BrowserTool::GoBack,
        BrowserTool::GoForward,
    ];

    /// Name used on the wire, both toward the model API and in the reply
    /// envelope the browser agent consumes.
    pub fn wire_name(&self) -> &'static str {
        match self {
            BrowserTool::OpenWebsite => "open_website",
            BrowserTool::GoogleSearch => "google_search",
            BrowserTool::SearchYoutube => "search_youtube",
            BrowserTool::ClickText => "click_text",
            BrowserTool::TypeText => "type_text",
            BrowserTool::Scroll => "scroll",
            BrowserTool::GoBack => "go_back",
            BrowserTool::GoForward => "go_forward",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.wire_name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            BrowserTool::OpenWebsite => {
                "Open a specific website by URL. Only use this when the exact, correct URL is \
                 known. For unknown sites use google_search instead."
            }
            BrowserTool::GoogleSearch => {
                "Run a Google search. Use when the user wants to find something or the exact URL \
                 is not known."
            }
            BrowserTool::SearchYoutube => "Search for videos on YouTube.",
            BrowserTool::ClickText => {
                "Click the page element that contains the given visible text."
            }
            BrowserTool::TypeText => "Type text into an input field on the page.",
            BrowserTool::Scroll => "Scroll the page up or down.",
            BrowserTool::GoBack => "Go back to the previous page in browser history.",
            BrowserTool::GoForward => "Go forward in browser history.",
        }
    }

    /// JSON-schema parameter declaration for this tool.
    pub fn parameters_schema(&self) -> Value {
        match self {
            BrowserTool::OpenWebsite => json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Full URL of the site (e.g. https://youtube.com)"
                    }
                },
                "required": ["url"]
            }),
            BrowserTool::GoogleSearch => json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query" }
                },
                "required": ["query"]
            }),
            BrowserTool::SearchYoutube => json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "What to search for on YouTube" }
                },
                "required": ["query"]
            }),
            BrowserTool::ClickText => json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Visible text of the element to click" }
                },
                "required": ["text"]
            }),
            BrowserTool::TypeText => json!({
                "type": "object",
                "properties": {
                    "target_text": {
                        "type": "string",
                        "description": "Label or placeholder identifying the input field"
                    },
                    "value": { "type": "string", "description": "Text to type into the field" }
                },
                "required": ["target_text", "value"]
            }),
            BrowserTool::Scroll => json!({
                "type": "object",
                "properties": {
                    "direction": {
                        "type": "string",
                        "enum": ["up", "down"],
                        "description": "Scroll direction"
                    }
                },
                "required": ["direction"]
            }),
            BrowserTool::GoBack | BrowserTool::GoForward => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// Full descriptor: name, description, and parameter schema.
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.wire_name(),
            "description": self.description(),
            "parameters": self.parameters_schema(),
        })
    }
}

/// All eight tool descriptors, in catalog order.
pub fn catalog() -> Vec<Value> {
    BrowserTool::ALL.iter().map(BrowserTool::descriptor).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A model-produced tool invocation, validated into its per-tool shape.
///
/// Raw model output is free-form JSON; parsing it here rejects unknown tool
/// names and malformed argument shapes at the gateway boundary instead of
/// forwarding them uncritically to the browser agent.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    OpenWebsite { url: String },
    GoogleSearch { query: String },
    SearchYoutube { query: String },
    ClickText { text: String },
    TypeText { target_text: String, value: String },
    Scroll { direction: ScrollDirection },
    GoBack,
    GoForward,
}

impl ToolArgs {
    /// Validate a raw `{name, args}` pair from the model.
    ///
    /// Extra argument keys are tolerated; missing required keys or wrong
    /// types are not.
    pub fn parse(name: &str, args: &Value) -> Result<Self> {
        let tool = BrowserTool::from_wire_name(name).ok_or_else(|| {
            GatewayError::MalformedResponse(format!("unknown tool name: {name}"))
        })?;

        let malformed = |e: serde_json::Error| {
            GatewayError::MalformedResponse(format!(
                "invalid arguments for {}: {e}",
                tool.wire_name()
            ))
        };

        match tool {
            BrowserTool::OpenWebsite => {
                #[derive(Deserialize)]
                struct Args {
                    url: String,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::OpenWebsite { url: a.url })
            }
            BrowserTool::GoogleSearch => {
                #[derive(Deserialize)]
                struct Args {
                    query: String,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::GoogleSearch { query: a.query })
            }
            BrowserTool::SearchYoutube => {
                #[derive(Deserialize)]
                struct Args {
                    query: String,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::SearchYoutube { query: a.query })
            }
            BrowserTool::ClickText => {
                #[derive(Deserialize)]
                struct Args {
                    text: String,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::ClickText { text: a.text })
            }
            BrowserTool::TypeText => {
                #[derive(Deserialize)]
                struct Args {
                    target_text: String,
                    value: String,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::TypeText { target_text: a.target_text, value: a.value })
            }
            BrowserTool::Scroll => {
                #[derive(Deserialize)]
                struct Args {
                    direction: ScrollDirection,
                }
                let a: Args = serde_json::from_value(args.clone()).map_err(malformed)?;
                Ok(ToolArgs::Scroll { direction: a.direction })
            }
            BrowserTool::GoBack => Ok(ToolArgs::GoBack),
            BrowserTool::GoForward => Ok(ToolArgs::GoForward),
        }
    }

    pub fn tool(&self) -> BrowserTool {
        match self {
            ToolArgs::OpenWebsite { .. } => BrowserTool::OpenWebsite,
            ToolArgs::GoogleSearch { .. } => BrowserTool::GoogleSearch,
            ToolArgs::SearchYoutube { .. } => BrowserTool::SearchYoutube,
            ToolArgs::ClickText { .. } => BrowserTool::ClickText,
            ToolArgs::TypeText { .. } => BrowserTool::TypeText,
            ToolArgs::Scroll { .. } => BrowserTool::Scroll,
            ToolArgs::GoBack => BrowserTool::GoBack,
            ToolArgs::GoForward => BrowserTool::GoForward,
        }
    }
}
