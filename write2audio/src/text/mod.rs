//! Text processing: whitespace-safe chunking and non-audible cleanup.

pub mod chunker;
mod cleaner;

pub use chunker::split_into_chunks;
pub use cleaner::clean_text;
