//! Error types for docchat
//!
//! One enum covers the whole crate. The retrieval core itself only ever
//! produces `InvalidChunking`; degenerate inputs (empty document, empty
//! query) are defined results, not errors, and collaborator failures
//! propagate unchanged.

use thiserror::Error;

/// Main error type for docchat
#[derive(Error, Debug)]
pub enum DocChatError {
    /// Chunking parameters that would never terminate or over-duplicate
    #[error(
        "Invalid chunking parameters: max_words={max_words}, overlap={overlap} \
         (requires max_words > 0 and overlap < max_words)"
    )]
    InvalidChunking { max_words: usize, overlap: usize },

    /// File extension with no registered decoder
    #[error("Unsupported file extension: {0:?} (expected .txt, .html, or .pdf)")]
    UnsupportedFormat(String),

    /// Extraction produced no usable text
    #[error("No text could be extracted from {0}")]
    EmptyDocument(String),

    /// HTML or PDF decoding failures
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ollama API errors
    #[error("Ollama API error: {0}")]
    Api(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for docchat operations
pub type Result<T> = std::result::Result<T, DocChatError>;
