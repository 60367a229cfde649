//! Lexstat Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use lexstat_core::EmptyDatasetPolicy;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Main Lexstat server
pub struct LexstatServer {
    config: WebConfig,
    state: AppState,
}

impl LexstatServer {
    /// Create a new server; fails if the root directory is not accessible
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone()).await?;

        Ok(Self { config, state })
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("Starting Lexstat Web Server");
        info!(root = %self.state.root().display(), "Root directory");
        info!(
            policy = self.config.empty_dataset_policy.as_str(),
            "Empty dataset policy"
        );

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("Server listening on http://{}", address);
        self.serve_on(listener).await
    }

    /// Serve on an already-bound listener until Ctrl+C
    pub async fn serve_on(self, listener: TcpListener) -> WebResult<()> {
        let app = create_app(self.state);

        if let Err(e) = serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            error!("Server error: {}", e);
            return Err(WebError::Server(e));
        }

        info!("Server shut down gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Builder for LexstatServer
pub struct LexstatServerBuilder {
    config: WebConfig,
}

impl LexstatServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: WebConfig) -> Self {
        Self { config }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the directory requests are resolved against
    pub fn root_dir<P: Into<PathBuf>>(mut self, root_dir: P) -> Self {
        self.config.root_dir = root_dir.into();
        self
    }

    /// Set the empty dataset policy
    pub fn empty_dataset_policy(mut self, policy: EmptyDatasetPolicy) -> Self {
        self.config.empty_dataset_policy = policy;
        self
    }

    /// Build the server
    pub async fn build(self) -> WebResult<LexstatServer> {
        LexstatServer::new(self.config).await
    }
}

impl Default for LexstatServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
