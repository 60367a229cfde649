//! File CRUD types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by every `/file/{filename}` endpoint
///
/// `filedata` is only consulted by create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FileRequest {
    /// Directory relative to the server root
    #[serde(default)]
    #[schema(example = "localfile")]
    pub filepath: String,
    #[serde(default)]
    #[schema(example = "Test update data")]
    pub filedata: String,
}

/// Result of a create or update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileWriteResponse {
    #[schema(example = "newFile02")]
    pub filename: String,
    #[schema(example = "localfile")]
    pub filepath: String,
    #[schema(example = 16)]
    pub bytes_written: u64,
}
