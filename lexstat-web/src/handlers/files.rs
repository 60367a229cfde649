//! File CRUD handlers
//!
//! Every endpoint takes the file name from the URL and the directory from the
//! JSON body; both are resolved against the server root before any I/O.

use super::types::{ErrorResponse, FileRequest, FileWriteResponse};
use crate::{ApiJson, AppState, WebResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

/// Create (or overwrite) a file
#[utoipa::path(
    post,
    path = "/api/file/{filename}",
    tag = "Files",
    params(("filename" = String, Path, description = "Name of the file")),
    request_body = FileRequest,
    responses(
        (status = 200, description = "File written", body = FileWriteResponse),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 500, description = "Write failed", body = ErrorResponse)
    )
)]
pub async fn create_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiJson(request): ApiJson<FileRequest>,
) -> WebResult<Json<FileWriteResponse>> {
    let path = state.resolve_file(&request.filepath, &filename).await?;
    let bytes_written = state.store.create(&path, &request.filedata).await?;
    info!(path = %path.display(), bytes_written, "File created");

    Ok(Json(FileWriteResponse {
        filename,
        filepath: request.filepath,
        bytes_written,
    }))
}

/// Read a file as UTF-8 text
#[utoipa::path(
    get,
    path = "/api/file/{filename}",
    tag = "Files",
    params(("filename" = String, Path, description = "Name of the file")),
    request_body = FileRequest,
    responses(
        (status = 200, description = "File content as a JSON string", body = String),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn read_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiJson(request): ApiJson<FileRequest>,
) -> WebResult<Json<String>> {
    let path = state.resolve_file(&request.filepath, &filename).await?;
    let content = state.store.read(&path).await?;
    Ok(Json(content))
}

/// Replace the content of an existing file
#[utoipa::path(
    put,
    path = "/api/file/{filename}",
    tag = "Files",
    params(("filename" = String, Path, description = "Name of the file")),
    request_body = FileRequest,
    responses(
        (status = 200, description = "File updated", body = FileWriteResponse),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn update_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiJson(request): ApiJson<FileRequest>,
) -> WebResult<Json<FileWriteResponse>> {
    let path = state.resolve_file(&request.filepath, &filename).await?;
    let bytes_written = state.store.update(&path, &request.filedata).await?;
    info!(path = %path.display(), bytes_written, "File updated");

    Ok(Json(FileWriteResponse {
        filename,
        filepath: request.filepath,
        bytes_written,
    }))
}

/// Delete a file
#[utoipa::path(
    delete,
    path = "/api/file/{filename}",
    tag = "Files",
    params(("filename" = String, Path, description = "Name of the file")),
    request_body = FileRequest,
    responses(
        (status = 200, description = "File deleted"),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn delete_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiJson(request): ApiJson<FileRequest>,
) -> WebResult<StatusCode> {
    let path = state.resolve_file(&request.filepath, &filename).await?;
    state.store.delete(&path).await?;
    info!(path = %path.display(), "File deleted");
    Ok(StatusCode::OK)
}
