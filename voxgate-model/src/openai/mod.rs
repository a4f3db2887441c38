//! OpenAI provider implementation for the gateway.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxgate_model::{BackendConfig, OpenAIBackend};
//!
//! let backend = OpenAIBackend::new(
//!     BackendConfig::new(std::env::var("OPENAI_API_KEY").unwrap()),
//! )?;
//! ```

mod client;
mod config;
pub(crate) mod convert;

pub use client::OpenAIBackend;
pub use config::BackendConfig;
