//! Lexstat Core - Core data structures and trait definitions
//!
//! This module defines the shared types, errors, configuration and logging for the lexstat workspace

pub mod config;
pub mod error;
pub mod logging;
pub mod traits;
pub mod types;

pub use error::*;
pub use logging::*;
pub use traits::*;
pub use types::*;

// Re-export commonly used external types
pub use async_trait::async_trait;
pub use tracing;
