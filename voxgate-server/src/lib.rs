//! # voxgate-server
//!
//! HTTP surface for the Voxgate gateway:
//!
//! - `POST /api/chat` - relay one turn to the model, get `{text, tool_calls}`
//! - `POST /api/stt` - multipart audio upload, get `{text}`
//! - `GET /api/tts?text=...` - get synthesized `audio/mpeg` bytes
//! - `GET /health` - credential/reachability check
//!
//! All relay endpoints answer HTTP 200 even on remote failure; the error is
//! folded into the response body so the browser agent parses one uniform
//! envelope. Structured error codes are logged before folding.

pub mod config;
pub mod rest;

pub use config::{SecurityConfig, ServerConfig};
pub use rest::{GatewayController, create_app};
