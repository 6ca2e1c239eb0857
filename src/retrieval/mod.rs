//! Retrieval core: chunking, lexical scoring, and top-k selection
//!
//! Everything here is a pure function of its arguments. The document is
//! re-chunked on every query; no index is built or cached between calls.

pub mod chunker;
pub mod context;
pub mod engine;
pub mod scorer;

pub use chunker::{chunk, ChunkingParams};
pub use context::{ContextBuilder, ContextConfig};
pub use engine::{RetrievalEngine, ScoredChunk, SearchParams};
pub use scorer::score;
