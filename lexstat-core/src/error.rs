//! Error type shared by every lexstat crate
//!
//! Each variant carries an `ErrorContext` so a failure deep inside a walk can be
//! traced back to the component, operation and path that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{error, warn};

pub type LexstatResult<T> = Result<T, LexstatError>;

/// Where and when an error was raised
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Random id, logged alongside the error
    pub error_id: String,
    pub timestamp: DateTime<Utc>,
    /// e.g. `directory_walker`, `local_file_store`
    pub component: String,
    pub operation: Option<String>,
    /// Additional metadata
    pub metadata: std::collections::HashMap<String, String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            metadata: std::collections::HashMap::new(),
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the Lexstat system
#[derive(Error, Debug)]
pub enum LexstatError {
    #[error("Resource not found: {resource}")]
    NotFound {
        resource: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Empty dataset: no samples for {metric}")]
    EmptyDataset {
        metric: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },
}

impl LexstatError {
    /// Classify an I/O failure on `path`: a missing file becomes `NotFound`, anything else `Io`
    pub fn from_io(err: std::io::Error, path: &Path, component: &str, operation: &str) -> Self {
        let context = ErrorContext::new(component)
            .with_operation(operation)
            .with_metadata("path", &path.display().to_string());

        if err.kind() == std::io::ErrorKind::NotFound {
            LexstatError::NotFound {
                resource: path.display().to_string(),
                source: Some(Box::new(err)),
                context: context.with_suggestion("Check that the path exists under the server root"),
            }
        } else {
            LexstatError::Io {
                message: format!("{} failed for {}: {}", operation, path.display(), err),
                source: Some(Box::new(err)),
                context,
            }
        }
    }

    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            LexstatError::NotFound { context, .. } => Some(context),
            LexstatError::Io { context, .. } => Some(context),
            LexstatError::EmptyDataset { context, .. } => Some(context),
            LexstatError::Validation { context, .. } => Some(context),
            LexstatError::Config { context, .. } => Some(context),
            LexstatError::Internal { context, .. } => Some(context),
            LexstatError::Serialization(_) => None,
        }
    }

    /// Stable machine-readable kind, used by the service boundary
    pub fn kind(&self) -> &'static str {
        match self {
            LexstatError::NotFound { .. } => "not_found",
            LexstatError::Io { .. } => "io_error",
            LexstatError::EmptyDataset { .. } => "empty_dataset",
            LexstatError::Validation { .. } => "invalid_path",
            LexstatError::Config { .. } => "config_error",
            LexstatError::Serialization(_) => "serialization_error",
            LexstatError::Internal { .. } => "internal_error",
        }
    }

    /// Log at error level for server-side faults, warn for caller mistakes
    pub fn log(&self) {
        match self {
            LexstatError::Internal { .. } | LexstatError::Io { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Internal or I/O error occurred"
                );
            }
            LexstatError::Config { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Configuration error"
                );
            }
            LexstatError::NotFound { .. }
            | LexstatError::Validation { .. }
            | LexstatError::EmptyDataset { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Request could not be satisfied"
                );
            }
            LexstatError::Serialization(_) => {
                error!(error = %self, "Serialization error");
            }
        }
    }
}

/// Constructors that fill in an `ErrorContext` for the calling component
#[macro_export]
macro_rules! not_found_error {
    ($resource:expr, $component:expr) => {
        $crate::LexstatError::NotFound {
            resource: $resource.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Verify the resource path")
                .with_suggestion("Check if the resource exists and is accessible"),
        }
    };
    ($resource:expr, $component:expr, $source:expr) => {
        $crate::LexstatError::NotFound {
            resource: $resource.to_string(),
            source: Some(Box::new($source)),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Verify the resource path")
                .with_suggestion("Check if the resource exists and is accessible"),
        }
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr, $component:expr) => {
        $crate::LexstatError::Internal {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component),
        }
    };
    ($msg:expr, $component:expr, $source:expr) => {
        $crate::LexstatError::Internal {
            message: $msg.to_string(),
            source: Some(Box::new($source)),
            context: $crate::ErrorContext::new($component),
        }
    };
}

#[macro_export]
macro_rules! empty_dataset_error {
    ($metric:expr, $component:expr) => {
        $crate::LexstatError::EmptyDataset {
            metric: $metric.to_string(),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Point the request at a directory containing text files")
                .with_suggestion("Set stats.empty_dataset_policy = \"zero\" to report zeros"),
        }
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::LexstatError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file")
                .with_suggestion("Run 'lexstat config --init' to create default config"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::LexstatError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check the field value and format"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_from_io_maps_missing_file_to_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let path = PathBuf::from("/srv/data/a.txt");

        let mapped = LexstatError::from_io(err, &path, "collector", "open");

        match &mapped {
            LexstatError::NotFound { resource, context, .. } => {
                assert_eq!(resource, "/srv/data/a.txt");
                assert_eq!(context.operation.as_deref(), Some("open"));
                assert_eq!(context.metadata.get("path").map(String::as_str), Some("/srv/data/a.txt"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(mapped.kind(), "not_found");
    }

    #[test]
    fn test_from_io_keeps_other_failures_as_io() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mapped = LexstatError::from_io(err, Path::new("/srv/x"), "collector", "open");

        assert!(matches!(mapped, LexstatError::Io { .. }));
        assert!(std::error::Error::source(&mapped).is_some());
    }

    #[test]
    fn test_macros_attach_context() {
        let err = empty_dataset_error!("word lengths", "aggregate");
        assert_eq!(err.kind(), "empty_dataset");
        assert_eq!(err.context().unwrap().component, "aggregate");
        assert_eq!(err.to_string(), "Empty dataset: no samples for word lengths");

        let err = validation_error!("path escapes root", "filepath", "web");
        match err {
            LexstatError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("filepath")),
            _ => panic!("Expected Validation error"),
        }

        let cause = io::Error::new(io::ErrorKind::Other, "worker panicked");
        let err = internal_error!("stats task failed", "web", cause);
        assert_eq!(err.kind(), "internal_error");
        assert_eq!(err.to_string(), "Internal error: stats task failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
