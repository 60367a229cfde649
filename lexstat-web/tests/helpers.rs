//! Integration test helpers
//!
//! Spawns the full application on an ephemeral port over a temporary root
//! directory and wraps the HTTP calls the tests make.
#![allow(dead_code)]

use lexstat_core::EmptyDatasetPolicy;
use lexstat_web::{create_app, AppState, WebConfig};
use serde_json::json;
use std::path::Path;
use std::sync::LazyLock;
use tempfile::TempDir;
use tokio::net::TcpListener;

// Initialise tracing once per test binary
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// Running application plus the root directory it serves
pub struct TestApp {
    pub address: String,
    pub root: TempDir,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file directly under the root, bypassing the API
    pub fn seed(&self, relative: &str, content: &str) {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create seed directory");
        }
        std::fs::write(path, content).expect("Failed to write seed file");
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn create_file(&self, filename: &str, filepath: &str, data: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/file/{}", &self.address, filename))
            .json(&json!({ "filepath": filepath, "filedata": data }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn read_file(&self, filename: &str, filepath: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/file/{}", &self.address, filename))
            .json(&json!({ "filepath": filepath }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn update_file(&self, filename: &str, filepath: &str, data: &str) -> reqwest::Response {
        self.api_client
            .put(format!("{}/api/file/{}", &self.address, filename))
            .json(&json!({ "filepath": filepath, "filedata": data }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_file(&self, filename: &str, filepath: &str) -> reqwest::Response {
        self.api_client
            .delete(format!("{}/api/file/{}", &self.address, filename))
            .json(&json!({ "filepath": filepath }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn file_stats(&self, filename: &str, filepath: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/file/{}/stats", &self.address, filename))
            .json(&json!({ "filepath": filepath }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn dir_stats(&self, filepath: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/dir/stats", &self.address))
            .json(&json!({ "filepath": filepath }))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawn the app with the default (error) empty dataset policy
pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(EmptyDatasetPolicy::Error).await
}

pub async fn spawn_app_with_policy(policy: EmptyDatasetPolicy) -> TestApp {
    LazyLock::force(&TRACING);

    let root = TempDir::new().expect("Failed to create temp root");
    let config = WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        root_dir: root.path().to_path_buf(),
        empty_dataset_policy: policy,
    };

    let state = AppState::new(config)
        .await
        .expect("Failed to build application state");
    let app = create_app(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        root,
        api_client: reqwest::Client::new(),
    }
}
