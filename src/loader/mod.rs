//! Document loading: local files and HTTP(S) URLs
//!
//! Formats are dispatched on the normalized file extension (taken from the
//! URL path component for URLs). Each format variant knows how to decode raw
//! bytes into plain text.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use crate::errors::{DocChatError, Result};

/// Rendering width for HTML-to-text conversion
const HTML_WIDTH: usize = 80;

/// Timeout for fetching remote documents
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Supported document formats, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Html,
    Pdf,
}

impl DocumentFormat {
    /// Resolve the format from a path or URL.
    ///
    /// For URLs the extension comes from the path component, ignoring query
    /// string and fragment. Matching is case-insensitive.
    pub fn from_source(source: &str) -> Result<Self> {
        let ext = extension_of(source);
        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            _ => Err(DocChatError::UnsupportedFormat(ext)),
        }
    }

    /// Decode raw bytes into plain text.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Self::Html => html2text::from_read(Cursor::new(bytes), HTML_WIDTH)
                .map_err(|e| DocChatError::Extraction(e.to_string())),
            Self::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| DocChatError::Extraction(e.to_string())),
        }
    }
}

/// An immutable loaded document
#[derive(Debug, Clone)]
pub struct Document {
    /// Path or URL the text came from
    pub source: String,
    /// Full extracted text
    pub text: String,
}

impl Document {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Load a document from a local path or an http(s) URL.
///
/// Fails when the extension is unsupported, the resource is unreachable,
/// or extraction yields only whitespace.
pub async fn load(source: &str) -> Result<Document> {
    let format = DocumentFormat::from_source(source)?;

    let bytes = if is_url(source) {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        let response = client.get(source).send().await?.error_for_status()?;
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(source).await?
    };

    let text = format.decode(&bytes)?;
    if text.split_whitespace().next().is_none() {
        return Err(DocChatError::EmptyDocument(source.to_string()));
    }

    Ok(Document {
        source: source.to_string(),
        text,
    })
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn extension_of(source: &str) -> String {
    let path = if is_url(source) {
        let after_scheme = source.splitn(2, "://").nth(1).unwrap_or(source);
        let path = after_scheme.splitn(2, '/').nth(1).unwrap_or("");
        path.split(|c| c == '?' || c == '#').next().unwrap_or("")
    } else {
        source
    };

    Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
