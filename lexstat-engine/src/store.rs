//! Local filesystem implementation of `FileStore`

use async_trait::async_trait;
use lexstat_core::{FileStore, LexstatError, LexstatResult};
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

const COMPONENT: &str = "local_file_store";

/// Reads and writes files directly on the local filesystem
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }

    async fn write_with(
        &self,
        options: &OpenOptions,
        path: &Path,
        data: &str,
        operation: &str,
    ) -> LexstatResult<u64> {
        let io_err = |e| LexstatError::from_io(e, path, COMPONENT, operation);

        let mut file = options.open(path).await.map_err(io_err)?;
        file.write_all(data.as_bytes()).await.map_err(io_err)?;
        file.sync_all().await.map_err(io_err)?;

        debug!(path = %path.display(), bytes = data.len(), operation, "File written");
        Ok(data.len() as u64)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn create(&self, path: &Path, data: &str) -> LexstatResult<u64> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| LexstatError::from_io(e, parent, COMPONENT, "create_dir"))?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        self.write_with(&options, path, data, "create").await
    }

    async fn read(&self, path: &Path) -> LexstatResult<String> {
        fs::read_to_string(path)
            .await
            .map_err(|e| LexstatError::from_io(e, path, COMPONENT, "read"))
    }

    async fn update(&self, path: &Path, data: &str) -> LexstatResult<u64> {
        let mut options = OpenOptions::new();
        options.write(true).truncate(true);
        self.write_with(&options, path, data, "update").await
    }

    async fn delete(&self, path: &Path) -> LexstatResult<()> {
        fs::remove_file(path)
            .await
            .map_err(|e| LexstatError::from_io(e, path, COMPONENT, "delete"))?;
        debug!(path = %path.display(), "File deleted");
        Ok(())
    }
}
