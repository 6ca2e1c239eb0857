//! Language model integration
//!
//! The model is an opaque collaborator: it takes an ordered message list and
//! returns one assistant reply. Its failures propagate to the caller; the
//! retrieval core never sees them.

pub mod client;
pub mod types;

pub use client::{LlmConfig, OllamaChatClient, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
pub use types::{ChatMessage, Role};
