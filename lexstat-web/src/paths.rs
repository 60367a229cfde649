//! Request path resolution
//!
//! Request-supplied paths are always relative to the server root. Anything
//! that could escape it lexically (`..`, absolute paths, drive prefixes) is
//! rejected before the filesystem is touched; `ensure_within_root` then
//! rejects escapes through symlinks.

use lexstat_core::{validation_error, LexstatResult};
use std::path::{Component, Path, PathBuf};

const COMPONENT: &str = "path_resolver";

/// Join a request-relative directory onto `root`
pub fn resolve_dir(root: &Path, relative: &str) -> LexstatResult<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(validation_error!(
                    format!("filepath '{}' must stay inside the server root", relative),
                    "filepath",
                    COMPONENT
                ));
            }
        }
    }
    Ok(resolved)
}

/// Join `relative/file_name` onto `root`; `file_name` must be a single plain name
pub fn resolve_file(root: &Path, relative: &str, file_name: &str) -> LexstatResult<PathBuf> {
    let mut components = Path::new(file_name).components();
    let name = match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => name,
        _ => {
            return Err(validation_error!(
                format!("filename '{}' must be a single path segment", file_name),
                "filename",
                COMPONENT
            ));
        }
    };

    Ok(resolve_dir(root, relative)?.join(name))
}

/// Reject `path` if its deepest existing ancestor resolves outside `root`
///
/// `root` must already be canonical. A dangling symlink counts as an escape.
pub async fn ensure_within_root(root: &Path, path: &Path) -> LexstatResult<()> {
    let mut existing = path;
    while tokio::fs::symlink_metadata(existing).await.is_err() {
        match existing.parent() {
            Some(parent) => existing = parent,
            None => return Err(escape_error(path)),
        }
    }

    match tokio::fs::canonicalize(existing).await {
        Ok(canonical) if canonical.starts_with(root) => Ok(()),
        _ => Err(escape_error(path)),
    }
}

fn escape_error(path: &Path) -> lexstat_core::LexstatError {
    validation_error!(
        format!("{} resolves outside the server root", path.display()),
        "filepath",
        COMPONENT
    )
}
