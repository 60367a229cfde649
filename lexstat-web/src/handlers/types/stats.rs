//! Statistics types

use lexstat_core::{DirStats, FileWordStats, MeanStdDev};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by `/dir/stats` and `/file/{filename}/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StatsRequest {
    /// Directory relative to the server root; empty means the root itself
    #[serde(default)]
    #[schema(example = "localfile")]
    pub filepath: String,
}

/// Aggregate lexical statistics for a directory tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DirStatsResponse {
    #[schema(example = 2)]
    pub total_number_of_files: usize,
    #[schema(example = 13)]
    pub total_number_of_bytes: u64,
    #[schema(example = 6.5)]
    pub avg_alphanum_char: f64,
    #[schema(example = 1.5)]
    pub stddev_alphanum_char: f64,
    #[schema(example = 4.0)]
    pub avg_wordlength_char: f64,
    #[schema(example = 1.414)]
    pub stddev_wordlength_char: f64,
}

impl From<DirStats> for DirStatsResponse {
    fn from(stats: DirStats) -> Self {
        Self {
            total_number_of_files: stats.file_count,
            total_number_of_bytes: stats.total_bytes,
            avg_alphanum_char: stats.avg_alphanum_char,
            stddev_alphanum_char: stats.stddev_alphanum_char,
            avg_wordlength_char: stats.avg_word_len,
            stddev_wordlength_char: stats.stddev_word_len,
        }
    }
}

/// Lexical statistics for a single file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FileStatsResponse {
    #[schema(example = "a.txt")]
    pub filename: String,
    #[schema(example = "localfile")]
    pub filepath: String,
    #[schema(example = 2)]
    pub word_count: usize,
    #[schema(example = 7)]
    pub alphanum_char_count: usize,
    #[schema(example = 3.5)]
    pub avg_wordlength_char: f64,
    #[schema(example = 1.5)]
    pub stddev_wordlength_char: f64,
}

impl FileStatsResponse {
    pub fn new(
        filename: String,
        filepath: String,
        stats: &FileWordStats,
        word_lengths: MeanStdDev,
    ) -> Self {
        Self {
            filename,
            filepath,
            word_count: stats.word_count,
            alphanum_char_count: stats.alphanum_char_count,
            avg_wordlength_char: word_lengths.mean,
            stddev_wordlength_char: word_lengths.std_dev,
        }
    }
}
