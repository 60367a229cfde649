//! OpenAPI specification for the Lexstat web server

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{
    DirStatsResponse, ErrorResponse, FileRequest, FileStatsResponse, FileWriteResponse,
    HealthResponse, StatsRequest,
};

/// OpenAPI document served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lexstat Web API",
        version = "0.1.0",
        description = "File storage and lexical statistics over a directory tree",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    paths(
        crate::handlers::health_check,

        crate::handlers::create_file,
        crate::handlers::read_file,
        crate::handlers::update_file,
        crate::handlers::delete_file,

        crate::handlers::file_stats,
        crate::handlers::dir_stats,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            FileRequest,
            FileWriteResponse,
            StatsRequest,
            DirStatsResponse,
            FileStatsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Files", description = "File create, read, update and delete"),
        (name = "Stats", description = "Lexical statistics"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
