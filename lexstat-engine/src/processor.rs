//! Stats Processor - directory and file statistics entry point
//!
//! Walks the tree first, then scans each file in walk order with at most one
//! handle open at a time. Any failure aborts the whole request; there is no
//! partial aggregation over the files that succeeded.

use crate::aggregate::DirStatsAccumulator;
use crate::collector::collect_file_stats;
use crate::walker::DirectoryWalker;
use lexstat_core::{
    performance, DirStats, EmptyDatasetPolicy, FileWordStats, LexstatResult, StatsConfig,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Computes `DirStats` and `FileWordStats` for already-resolved paths
#[derive(Debug, Clone, Default)]
pub struct StatsProcessor {
    policy: EmptyDatasetPolicy,
}

impl StatsProcessor {
    /// Create a processor that fails on empty datasets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with an explicit empty-dataset policy
    pub fn with_policy(policy: EmptyDatasetPolicy) -> Self {
        Self { policy }
    }

    /// Create a processor from the `[stats]` configuration section
    pub fn from_config(config: &StatsConfig) -> Self {
        Self::with_policy(config.empty_dataset_policy)
    }

    pub fn policy(&self) -> EmptyDatasetPolicy {
        self.policy
    }

    /// Aggregate statistics over every regular file under `root`
    pub fn dir_stats(&self, root: &Path) -> LexstatResult<DirStats> {
        performance::measure_sync("dir_stats", || {
            info!(root = %root.display(), "Computing directory stats");

            let records = DirectoryWalker::new(root).walk().inspect_err(|e| {
                warn!(root = %root.display(), error = %e, "Directory walk failed");
            })?;
            debug!(root = %root.display(), files = records.len(), "Walk complete");

            let mut accumulator = DirStatsAccumulator::new();
            for record in &records {
                let stats = collect_file_stats(&record.path).inspect_err(|e| {
                    warn!(path = %record.path.display(), error = %e, "File scan failed, aborting");
                })?;
                accumulator.add(record, &stats);
            }

            let stats = accumulator.finish(self.policy)?;
            info!(
                root = %root.display(),
                files = stats.file_count,
                bytes = stats.total_bytes,
                "Directory stats ready"
            );
            Ok(stats)
        })
    }

    /// Word statistics for a single file
    pub fn file_stats(&self, path: &Path) -> LexstatResult<FileWordStats> {
        collect_file_stats(path)
    }
}

/// Aggregate statistics over `root` with the given empty-dataset policy
pub fn compute_dir_stats(root: &Path, policy: EmptyDatasetPolicy) -> LexstatResult<DirStats> {
    StatsProcessor::with_policy(policy).dir_stats(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexstat_core::LexstatError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_two_file_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hi there").unwrap();
        fs::write(dir.path().join("b.txt"), "world").unwrap();

        let stats = StatsProcessor::new().dir_stats(dir.path()).unwrap();

        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.total_bytes, 13);
        assert_eq!(stats.avg_word_len, 4.0);
        assert!((stats.stddev_word_len - 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(stats.avg_alphanum_char, 6.0);
        assert_eq!(stats.stddev_alphanum_char, 1.0);
    }

    #[test]
    fn test_nested_directories_are_included() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub/inner")).unwrap();
        fs::write(dir.path().join("sub/inner/deep.txt"), "abc abc").unwrap();
        fs::write(dir.path().join("top.txt"), "a").unwrap();

        let stats = StatsProcessor::new().dir_stats(dir.path()).unwrap();
        assert_eq!(stats.file_count, 2);
        // word lengths [3, 3, 1]
        assert!((stats.avg_word_len - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_directory_policies() {
        let dir = TempDir::new().unwrap();

        let err = StatsProcessor::new().dir_stats(dir.path()).unwrap_err();
        assert!(matches!(err, LexstatError::EmptyDataset { .. }));

        let stats = StatsProcessor::with_policy(EmptyDatasetPolicy::Zero)
            .dir_stats(dir.path())
            .unwrap();
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.avg_alphanum_char, 0.0);
        assert_eq!(stats.avg_word_len, 0.0);
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = compute_dir_stats(&dir.path().join("nope"), EmptyDatasetPolicy::Error)
            .unwrap_err();

        assert!(matches!(err, LexstatError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_aborts_whole_scan() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "fine").unwrap();
        let locked = dir.path().join("b.txt");
        fs::write(&locked, "secret").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits, in which case there is nothing to observe
        if fs::File::open(&locked).is_ok() {
            return;
        }

        let err = StatsProcessor::new().dir_stats(dir.path()).unwrap_err();
        assert!(matches!(err, LexstatError::Io { .. }));
    }

    #[test]
    fn test_file_stats_and_config_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "abc 123 --- foo-bar").unwrap();

        let processor = StatsProcessor::from_config(&StatsConfig {
            empty_dataset_policy: EmptyDatasetPolicy::Zero,
        });
        assert_eq!(processor.policy(), EmptyDatasetPolicy::Zero);

        let stats = processor.file_stats(&path).unwrap();
        assert_eq!(stats.word_lengths, vec![3, 3, 3]);
    }
}
