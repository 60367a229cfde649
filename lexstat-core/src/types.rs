//! Core data type definitions

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A regular file discovered during a directory walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path of the file, rooted at the walk root
    pub path: PathBuf,
    /// File size in bytes, as reported by the filesystem at walk time
    pub size_bytes: u64,
}

/// Per-file token statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWordStats {
    /// One entry per alphanumeric token, in scan order (code points)
    pub word_lengths: Vec<usize>,
    /// Sum of `word_lengths`
    pub alphanum_char_count: usize,
    /// Length of `word_lengths`
    pub word_count: usize,
}

impl FileWordStats {
    /// Append one word, keeping the count and sum in step with the lengths
    pub fn push_word(&mut self, length: usize) {
        self.word_lengths.push(length);
        self.alphanum_char_count += length;
        self.word_count += 1;
    }
}

impl FromIterator<usize> for FileWordStats {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut stats = FileWordStats::default();
        for length in iter {
            stats.push_word(length);
        }
        stats
    }
}

/// Corpus-wide statistics for one directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirStats {
    #[serde(rename = "total_number_of_files")]
    pub file_count: usize,
    #[serde(rename = "total_number_of_bytes")]
    pub total_bytes: u64,
    /// Mean of per-file alphanumeric character counts
    pub avg_alphanum_char: f64,
    pub stddev_alphanum_char: f64,
    /// Mean of per-word lengths across every file
    #[serde(rename = "avg_wordlength_char")]
    pub avg_word_len: f64,
    #[serde(rename = "stddev_wordlength_char")]
    pub stddev_word_len: f64,
}

/// Population mean and standard deviation of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanStdDev {
    pub mean: f64,
    pub std_dev: f64,
}

impl MeanStdDev {
    pub const ZERO: MeanStdDev = MeanStdDev {
        mean: 0.0,
        std_dev: 0.0,
    };
}

/// What to report when a statistic has no samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDatasetPolicy {
    /// Fail with `LexstatError::EmptyDataset`
    #[default]
    Error,
    /// Report 0.0 for both mean and standard deviation
    Zero,
}

impl EmptyDatasetPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyDatasetPolicy::Error => "error",
            EmptyDatasetPolicy::Zero => "zero",
        }
    }
}

impl std::str::FromStr for EmptyDatasetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(EmptyDatasetPolicy::Error),
            "zero" => Ok(EmptyDatasetPolicy::Zero),
            other => Err(format!(
                "unknown empty dataset policy '{}', expected 'error' or 'zero'",
                other
            )),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexstatConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory that every request path is resolved against
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub empty_dataset_policy: EmptyDatasetPolicy,
}
