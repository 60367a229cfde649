//! Lexstat Engine - directory statistics and local file storage
//!
//! Walks a directory, tokenizes every regular file, and aggregates word-length
//! and alphanumeric-character distributions across the corpus

pub mod aggregate;
pub mod collector;
pub mod processor;
pub mod store;
pub mod tokenizer;
pub mod walker;

pub use aggregate::*;
pub use collector::*;
pub use processor::*;
pub use store::*;
pub use tokenizer::*;
pub use walker::*;
