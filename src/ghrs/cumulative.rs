use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, warn};

use super::{column_index, counter_field, open_csv, parse_date, Window, TIME_COLUMN};
use crate::error::Result;

/// Windowed slice of a cumulative counter (stars, forks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeSeries {
    pub series: Vec<i64>,
    pub current: i64,
    pub growth: i64,
}

/// Reads a cumulative counter CSV and measures its growth over `window`.
///
/// Samples are sorted by timestamp before use, so file order does not matter.
/// A missing file yields an empty series with zero value and growth.
pub fn read_cumulative_series(
    path: &Path,
    value_column: &str,
    window: &Window,
) -> CumulativeSeries {
    match load_samples(path, value_column) {
        Ok(samples) => summarize(samples, window),
        Err(e) => {
            warn!("Could not read {value_column} from {}: {e}", path.display());
            CumulativeSeries::default()
        }
    }
}

fn load_samples(path: &Path, value_column: &str) -> Result<Vec<(NaiveDateTime, i64)>> {
    let Some(mut reader) = open_csv(path)? else {
        debug!("No {value_column} data at {}", path.display());
        return Ok(Vec::new());
    };

    let headers = reader.headers()?.clone();
    let time_col = column_index(&headers, TIME_COLUMN);
    let value_col = column_index(&headers, value_column);

    let mut samples = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed row {} in {}: {e}", line + 1, path.display());
                continue;
            }
        };

        let Some(at) = time_col.and_then(|i| record.get(i)).and_then(parse_date) else {
            continue;
        };

        match counter_field(&record, value_col) {
            Some(value) => samples.push((at, value)),
            None => warn!(
                "Skipping row {} in {}: {value_column} is not a number",
                line + 1,
                path.display()
            ),
        }
    }

    Ok(samples)
}

fn summarize(mut samples: Vec<(NaiveDateTime, i64)>, window: &Window) -> CumulativeSeries {
    samples.sort_by_key(|&(at, _)| at);

    let Some(&(_, current)) = samples.last() else {
        return CumulativeSeries::default();
    };

    let series: Vec<i64> = samples
        .iter()
        .filter(|(at, _)| window.at_or_after_cutoff(*at))
        .map(|&(_, value)| value)
        .collect();

    let before_window = samples
        .iter()
        .rev()
        .find(|(at, _)| !window.at_or_after_cutoff(*at))
        .map(|&(_, value)| value);

    let growth = match (before_window, series.first()) {
        (Some(baseline), _) => current - baseline,
        // Everything sampled lies inside the window. A flat run counts as
        // having grown from zero.
        (None, Some(&first)) if first == current => current,
        (None, Some(&first)) => current - first,
        (None, None) => 0,
    };

    CumulativeSeries {
        series,
        current,
        growth,
    }
}
