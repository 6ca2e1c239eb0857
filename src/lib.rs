//! docchat - chat with a document from your terminal
//!
//! Loads a single document (text, HTML, or PDF; local file or URL), splits it
//! into overlapping word windows, ranks those windows against each question by
//! lexical overlap, and hands the best ones to a local Ollama model together
//! with the running conversation.
//!
//! # Architecture
//!
//! - `retrieval`: the chunk/score/select core (pure functions, no I/O)
//! - `loader`: document loading and text extraction
//! - `llm`: Ollama chat client
//! - `repl`: interactive loop, commands, and display

pub mod errors;
pub mod loader;
pub mod retrieval;
pub mod llm;
pub mod language;
pub mod repl;

pub mod cli;

// Re-export commonly used types
pub use errors::{DocChatError, Result};
