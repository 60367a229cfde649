//! Request and response types used by the handlers

pub mod common;
pub mod files;
pub mod stats;

pub use common::*;
pub use files::*;
pub use stats::*;
