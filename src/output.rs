//! Result output
//!
//! Results are written as a single text shard named
//! `<prefix>-00000-of-00001`, one `name,rank` line per result.

use crate::algo::{PageScore, RankReport};
use crate::LinkRankResult;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Path of the single result shard for `prefix`
pub fn shard_path(prefix: impl AsRef<Path>) -> PathBuf {
    let prefix = prefix.as_ref();
    let mut name = prefix.as_os_str().to_os_string();
    name.push("-00000-of-00001");
    PathBuf::from(name)
}

/// Write one line per item to the result shard
pub fn write_lines<T: Display>(prefix: impl AsRef<Path>, items: &[T]) -> LinkRankResult<PathBuf> {
    let path = shard_path(prefix);
    let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
    for item in items {
        writeln!(file, "{}", item)?;
    }
    file.flush()?;
    info!("Wrote {} lines to {:?}", items.len(), path);
    Ok(path)
}

/// Write the top page, or an empty shard when there is no result
pub fn write_top(prefix: impl AsRef<Path>, top: Option<&PageScore>) -> LinkRankResult<PathBuf> {
    let items: Vec<&PageScore> = top.into_iter().collect();
    write_lines(prefix, &items)
}

/// Pretty-printed JSON form of a report
pub fn report_json(report: &RankReport) -> LinkRankResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
