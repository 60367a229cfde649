//! Corpus-wide mean and standard deviation
//!
//! Two distributions are tracked per directory, at different granularities:
//! alphanumeric characters per *file* (one sample per file) and word length
//! (one sample per word, across all files). Both use population standard
//! deviation.

use lexstat_core::{
    empty_dataset_error, DirStats, EmptyDatasetPolicy, FileRecord, FileWordStats, LexstatResult,
    MeanStdDev,
};

const COMPONENT: &str = "aggregate_stats_engine";

pub const METRIC_ALPHANUM_PER_FILE: &str = "alphanumeric characters per file";
pub const METRIC_WORD_LENGTH: &str = "word lengths";

/// Population mean and standard deviation of `values`
///
/// `mean = sum / n`, `std_dev = sqrt(sum((x - mean)^2) / n)`.
pub fn mean_std_dev(values: &[usize]) -> LexstatResult<MeanStdDev> {
    if values.is_empty() {
        return Err(empty_dataset_error!("values", COMPONENT));
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&x| x as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&x| {
            let delta = x as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;

    Ok(MeanStdDev {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Streaming mean/variance (Welford), so samples never need to be buffered
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` when no samples were pushed
    pub fn finish(&self) -> Option<MeanStdDev> {
        if self.count == 0 {
            return None;
        }
        Some(MeanStdDev {
            mean: self.mean,
            std_dev: (self.m2 / self.count as f64).max(0.0).sqrt(),
        })
    }
}

impl Extend<usize> for RunningStats {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.push(value as f64);
        }
    }
}

/// Folds `(FileRecord, FileWordStats)` pairs into `DirStats`
#[derive(Debug, Clone, Default)]
pub struct DirStatsAccumulator {
    file_count: usize,
    total_bytes: u64,
    alphanum_per_file: RunningStats,
    word_lengths: RunningStats,
}

impl DirStatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &FileRecord, stats: &FileWordStats) {
        self.file_count += 1;
        self.total_bytes += record.size_bytes;
        self.alphanum_per_file
            .push(stats.alphanum_char_count as f64);
        self.word_lengths.extend(stats.word_lengths.iter().copied());
    }

    pub fn finish(self, policy: EmptyDatasetPolicy) -> LexstatResult<DirStats> {
        let alphanum = resolve(&self.alphanum_per_file, METRIC_ALPHANUM_PER_FILE, policy)?;
        let words = resolve(&self.word_lengths, METRIC_WORD_LENGTH, policy)?;

        Ok(DirStats {
            file_count: self.file_count,
            total_bytes: self.total_bytes,
            avg_alphanum_char: alphanum.mean,
            stddev_alphanum_char: alphanum.std_dev,
            avg_word_len: words.mean,
            stddev_word_len: words.std_dev,
        })
    }
}

fn resolve(
    stats: &RunningStats,
    metric: &str,
    policy: EmptyDatasetPolicy,
) -> LexstatResult<MeanStdDev> {
    match (stats.finish(), policy) {
        (Some(result), _) => Ok(result),
        (None, EmptyDatasetPolicy::Zero) => Ok(MeanStdDev::ZERO),
        (None, EmptyDatasetPolicy::Error) => Err(empty_dataset_error!(metric, COMPONENT)),
    }
}
