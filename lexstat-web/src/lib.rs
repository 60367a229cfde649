//! Lexstat Web Server
//!
//! HTTP boundary for file CRUD and directory statistics. Request paths are
//! resolved against a configured root; the engine only ever sees resolved paths.

pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod paths;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use extract::ApiJson;
pub use server::LexstatServer;
pub use state::AppState;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use lexstat_core::{internal_error, EmptyDatasetPolicy, LexstatConfig, LexstatError};
use serde_json::json;
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::api_routes())
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB max body size
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory every request path is resolved against
    pub root_dir: PathBuf,
    /// Behaviour when a statistic has no samples
    pub empty_dataset_policy: EmptyDatasetPolicy,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_lexstat_config(&LexstatConfig::default())
    }
}

impl WebConfig {
    /// Build from the shared TOML configuration
    pub fn from_lexstat_config(config: &LexstatConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            root_dir: config.server.root_dir.clone(),
            empty_dataset_policy: config.stats.empty_dataset_policy,
        }
    }

    /// Override fields from `LEXSTAT_*` environment variables when set
    pub fn with_env_overrides(self) -> Self {
        Self {
            host: std::env::var("LEXSTAT_HOST").unwrap_or(self.host),
            port: std::env::var("LEXSTAT_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(self.port),
            root_dir: std::env::var("LEXSTAT_ROOT")
                .map(PathBuf::from)
                .unwrap_or(self.root_dir),
            empty_dataset_policy: std::env::var("LEXSTAT_EMPTY_POLICY")
                .ok()
                .and_then(|policy| policy.parse().ok())
                .unwrap_or(self.empty_dataset_policy),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error(transparent)]
    Lexstat(#[from] LexstatError),

    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] JsonRejection),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Lexstat(err) => {
                let status = match err {
                    LexstatError::NotFound { .. } => StatusCode::NOT_FOUND,
                    LexstatError::Validation { .. } => StatusCode::BAD_REQUEST,
                    LexstatError::EmptyDataset { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.kind())
            }
            WebError::Server(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
            WebError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            WebError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
        }
    }
}

impl From<tokio::task::JoinError> for WebError {
    fn from(err: tokio::task::JoinError) -> Self {
        WebError::Lexstat(internal_error!(
            format!("Background task failed: {}", err),
            "web_server"
        ))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::Lexstat(err) => err.log(),
            WebError::InvalidRequest(_) => tracing::warn!(error = %self, "Rejected request body"),
            other => tracing::error!(error = %other, "Request failed"),
        }

        let (status, error_code) = self.status_and_code();
        let body = Json(json!({
            "error": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;
