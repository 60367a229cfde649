//! Statistics handlers
//!
//! Walking and scanning are blocking filesystem work and run on the blocking
//! pool; a walk is not isolated from concurrent CRUD requests.

use super::types::{DirStatsResponse, ErrorResponse, FileStatsResponse, StatsRequest};
use crate::{ApiJson, AppState, WebResult};
use axum::{
    extract::{Path, State},
    response::Json,
};
use lexstat_core::MeanStdDev;
use lexstat_engine::mean_std_dev;
use tracing::info;

/// Aggregate statistics for a directory tree
#[utoipa::path(
    get,
    path = "/api/dir/stats",
    tag = "Stats",
    request_body = StatsRequest,
    responses(
        (status = 200, description = "Directory statistics", body = DirStatsResponse),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 404, description = "Directory not found", body = ErrorResponse),
        (status = 422, description = "No files or no words to aggregate", body = ErrorResponse),
        (status = 500, description = "A file could not be read", body = ErrorResponse)
    )
)]
pub async fn dir_stats(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StatsRequest>,
) -> WebResult<Json<DirStatsResponse>> {
    let dir = state.resolve_dir(&request.filepath).await?;
    info!(dir = %dir.display(), "Directory stats requested");

    let processor = state.processor.clone();
    let stats = tokio::task::spawn_blocking(move || processor.dir_stats(&dir)).await??;

    Ok(Json(DirStatsResponse::from(stats)))
}

/// Word statistics for a single file
#[utoipa::path(
    get,
    path = "/api/file/{filename}/stats",
    tag = "Stats",
    params(("filename" = String, Path, description = "Name of the file")),
    request_body = StatsRequest,
    responses(
        (status = 200, description = "File statistics", body = FileStatsResponse),
        (status = 400, description = "Invalid body or path escapes the server root", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn file_stats(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiJson(request): ApiJson<StatsRequest>,
) -> WebResult<Json<FileStatsResponse>> {
    let path = state.resolve_file(&request.filepath, &filename).await?;

    let processor = state.processor.clone();
    let stats = tokio::task::spawn_blocking(move || processor.file_stats(&path)).await??;

    let word_lengths = if stats.word_lengths.is_empty() {
        MeanStdDev::ZERO
    } else {
        mean_std_dev(&stats.word_lengths)?
    };

    Ok(Json(FileStatsResponse::new(
        filename,
        request.filepath,
        &stats,
        word_lengths,
    )))
}
