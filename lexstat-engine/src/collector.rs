//! Per-file word statistics

use crate::tokenizer::alphanumeric_words;
use lexstat_core::{FileWordStats, LexstatError, LexstatResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::trace;

/// Reduce a reader's alphanumeric words into `FileWordStats`
///
/// Lengths are counted in code points.
pub fn scan_reader<R: BufRead>(reader: R) -> io::Result<FileWordStats> {
    let mut stats = FileWordStats::default();
    for word in alphanumeric_words(reader) {
        stats.push_word(word?.chars().count());
    }
    Ok(stats)
}

/// Open `path` read-only and collect its word statistics
///
/// The handle lives only for the duration of this call.
pub fn collect_file_stats(path: &Path) -> LexstatResult<FileWordStats> {
    let file = File::open(path)
        .map_err(|e| LexstatError::from_io(e, path, "file_stats_collector", "open"))?;

    let stats = scan_reader(BufReader::new(file))
        .map_err(|e| LexstatError::from_io(e, path, "file_stats_collector", "read"))?;

    trace!(
        path = %path.display(),
        words = stats.word_count,
        chars = stats.alphanum_char_count,
        "Collected file stats"
    );

    Ok(stats)
}
