//! Route definitions for the Lexstat web server

use crate::{handlers, AppState};
use axum::{routing::get, Router};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // File CRUD
        .route(
            "/file/{filename}",
            get(handlers::read_file)
                .post(handlers::create_file)
                .put(handlers::update_file)
                .delete(handlers::delete_file),
        )
        // Statistics
        .route("/file/{filename}/stats", get(handlers::file_stats))
        .route("/dir/stats", get(handlers::dir_stats))
}
