//! Core trait definitions

use crate::error::LexstatResult;
use async_trait::async_trait;
use std::path::Path;

/// Plain create/read/update/delete of a single file at an already-resolved path
///
/// Implementations perform no locking; concurrent writers to the same path race.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Create the file (and any missing parent directories), truncating existing content
    async fn create(&self, path: &Path, data: &str) -> LexstatResult<u64>;

    /// Read the whole file as UTF-8 text
    async fn read(&self, path: &Path) -> LexstatResult<String>;

    /// Replace the content of an existing file; never creates one
    async fn update(&self, path: &Path, data: &str) -> LexstatResult<u64>;

    /// Remove the file
    async fn delete(&self, path: &Path) -> LexstatResult<()>;
}
