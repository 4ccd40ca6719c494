//! Readers for the CSV snapshots that github-repo-stats commits under
//! `<repo>/ghrs-data/`.

mod collect;
mod cumulative;
mod date;
mod traffic;

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::Result;

pub use collect::{collect_repo_stats, CollectOptions, DEFAULT_GROWTH_DAYS, DEFAULT_TRAFFIC_DAYS};
use cumulative::read_cumulative_series;
use date::{parse_date, Window};
use traffic::read_views_clones;

pub const DATA_DIR: &str = "ghrs-data";
pub const TRAFFIC_FILE: &str = "views_clones_aggregate.csv";
pub const STARGAZERS_FILE: &str = "stargazers.csv";
pub const FORKS_FILE: &str = "forks.csv";

pub const TIME_COLUMN: &str = "time_iso8601";
pub const STARS_COLUMN: &str = "stars_cumulative";
pub const FORKS_COLUMN: &str = "forks_cumulative";

/// Opens a headed CSV file, or `None` when it does not exist.
///
/// Ragged rows are allowed through; missing trailing cells read as empty.
fn open_csv(path: &Path) -> Result<Option<Reader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(
            ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(file),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn field<'r>(record: &'r StringRecord, index: Option<usize>) -> &'r str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

/// Missing or non-numeric cells count as zero.
fn numeric_field(record: &StringRecord, index: Option<usize>) -> i64 {
    field(record, index).trim().parse().unwrap_or(0)
}

/// Missing or empty cells count as zero; anything else must parse.
fn counter_field(record: &StringRecord, index: Option<usize>) -> Option<i64> {
    let value = field(record, index).trim();
    if value.is_empty() {
        Some(0)
    } else {
        value.parse().ok()
    }
}
