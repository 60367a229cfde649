//! Directory walker: enumerates regular files under a root

use lexstat_core::{ErrorContext, FileRecord, LexstatError, LexstatResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive, pre-order walk over regular files
///
/// Entries within a directory are visited in file-name order. Symlinks are
/// not followed and are not recorded, so the walk cannot cycle. This holds
/// for the root too: a root that is itself a symlink yields nothing.
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    root: PathBuf,
}

impl DirectoryWalker {
    /// Create a walker for the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory being walked
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield one `FileRecord` per regular file
    ///
    /// Any entry that cannot be read or stat'd yields a `NotFound` error.
    pub fn records(&self) -> impl Iterator<Item = LexstatResult<FileRecord>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(e) => Some(Err(self.walk_error(e))),
                Ok(entry) if entry.file_type().is_file() => Some(
                    entry
                        .metadata()
                        .map(|metadata| FileRecord {
                            size_bytes: metadata.len(),
                            path: entry.into_path(),
                        })
                        .map_err(|e| self.walk_error(e)),
                ),
                Ok(_) => None,
            })
    }

    /// Walk the whole tree; the first failure aborts with no partial result
    pub fn walk(&self) -> LexstatResult<Vec<FileRecord>> {
        self.records().collect()
    }

    fn walk_error(&self, err: walkdir::Error) -> LexstatError {
        let resource = err
            .path()
            .unwrap_or(&self.root)
            .display()
            .to_string();

        LexstatError::NotFound {
            context: ErrorContext::new("directory_walker")
                .with_operation("walk")
                .with_metadata("root", &self.root.display().to_string())
                .with_suggestion("Check that the directory exists and every entry is readable"),
            resource,
            source: Some(Box::new(err)),
        }
    }
}

/// Collect every regular file under `root`
pub fn walk_directory(root: &Path) -> LexstatResult<Vec<FileRecord>> {
    DirectoryWalker::new(root).walk()
}
