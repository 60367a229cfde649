//! HTTP request handlers for the Lexstat web server

pub mod files;
pub mod health;
pub mod stats;
pub mod types;

pub use files::*;
pub use health::*;
pub use stats::*;

pub use types::*;
