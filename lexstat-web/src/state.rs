//! Shared application state

use crate::{paths, WebConfig, WebError, WebResult};
use lexstat_core::{FileStore, LexstatResult};
use lexstat_engine::{LocalFileStore, StatsProcessor};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// State cloned into every request handler
///
/// Nothing here is mutable: concurrent requests share only the filesystem,
/// so a stats walk may observe writes from in-flight CRUD requests.
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Canonical root directory
    root: Arc<PathBuf>,
    /// File CRUD backend
    pub store: Arc<dyn FileStore>,
    /// Directory and file statistics
    pub processor: StatsProcessor,
}

impl AppState {
    /// Create application state backed by the local filesystem
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        Self::with_store(config, Arc::new(LocalFileStore::new())).await
    }

    /// Create application state with a custom file store
    pub async fn with_store(config: WebConfig, store: Arc<dyn FileStore>) -> WebResult<Self> {
        let root = tokio::fs::canonicalize(&config.root_dir)
            .await
            .map_err(|e| {
                WebError::Config(format!(
                    "Root directory {} is not accessible: {}",
                    config.root_dir.display(),
                    e
                ))
            })?;

        if !root.is_dir() {
            return Err(WebError::Config(format!(
                "Root {} is not a directory",
                root.display()
            )));
        }

        info!(root = %root.display(), "Serving files from root directory");

        Ok(Self {
            processor: StatsProcessor::with_policy(config.empty_dataset_policy),
            config,
            root: Arc::new(root),
            store,
        })
    }

    /// Canonical root every request path is resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request directory, rejecting lexical and symlink escapes
    pub async fn resolve_dir(&self, relative: &str) -> LexstatResult<PathBuf> {
        let path = paths::resolve_dir(&self.root, relative)?;
        paths::ensure_within_root(&self.root, &path).await?;
        Ok(path)
    }

    /// Resolve a request file, rejecting lexical and symlink escapes
    pub async fn resolve_file(&self, relative: &str, file_name: &str) -> LexstatResult<PathBuf> {
        let path = paths::resolve_file(&self.root, relative, file_name)?;
        paths::ensure_within_root(&self.root, &path).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_state_canonicalizes_root() {
        let dir = TempDir::new().unwrap();
        let config = WebConfig {
            root_dir: dir.path().join("."),
            ..WebConfig::default()
        };

        let state = AppState::new(config).await.unwrap();
        assert_eq!(state.root(), dir.path().canonicalize().unwrap());
        assert_eq!(
            state.resolve_file("docs", "a.txt").await.unwrap(),
            state.root().join("docs/a.txt")
        );
    }

    #[tokio::test]
    async fn test_missing_root_is_config_error() {
        let dir = TempDir::new().unwrap();
        let config = WebConfig {
            root_dir: dir.path().join("missing"),
            ..WebConfig::default()
        };

        assert!(matches!(
            AppState::new(config).await,
            Err(WebError::Config(_))
        ));
    }
}
