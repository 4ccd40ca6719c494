use std::path::Path;

use log::{debug, warn};

use super::{column_index, numeric_field, open_csv, parse_date, Window, TIME_COLUMN};
use crate::error::Result;

const VIEWS_TOTAL: &str = "views_total";
const VIEWS_UNIQUE: &str = "views_unique";
const CLONES_TOTAL: &str = "clones_total";
const CLONES_UNIQUE: &str = "clones_unique";

/// Daily views/clones inside the traffic window, plus their sums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficSeries {
    pub views: Vec<i64>,
    pub clones: Vec<i64>,
    pub views_total: i64,
    pub views_unique: i64,
    pub clones_total: i64,
    pub clones_unique: i64,
}

/// Reads `views_clones_aggregate.csv`, keeping rows inside `window`.
///
/// Rows are taken in file order. A missing file yields empty series; an
/// unreadable row or timestamp is skipped and the scan continues.
pub fn read_views_clones(path: &Path, window: &Window) -> TrafficSeries {
    match try_read_views_clones(path, window) {
        Ok(series) => series,
        Err(e) => {
            warn!("Could not read traffic data from {}: {e}", path.display());
            TrafficSeries::default()
        }
    }
}

fn try_read_views_clones(path: &Path, window: &Window) -> Result<TrafficSeries> {
    let mut series = TrafficSeries::default();

    let Some(mut reader) = open_csv(path)? else {
        debug!("No traffic data at {}", path.display());
        return Ok(series);
    };

    let headers = reader.headers()?.clone();
    let time_col = column_index(&headers, TIME_COLUMN);
    let views_total_col = column_index(&headers, VIEWS_TOTAL);
    let views_unique_col = column_index(&headers, VIEWS_UNIQUE);
    let clones_total_col = column_index(&headers, CLONES_TOTAL);
    let clones_unique_col = column_index(&headers, CLONES_UNIQUE);

    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed row {} in {}: {e}", line + 1, path.display());
                continue;
            }
        };

        let Some(at) = time_col
            .and_then(|i| record.get(i))
            .and_then(parse_date)
        else {
            debug!("Skipping row {} in {}: no usable timestamp", line + 1, path.display());
            continue;
        };

        if !window.contains(at) {
            continue;
        }

        let views_unique = numeric_field(&record, views_unique_col);
        let clones_unique = numeric_field(&record, clones_unique_col);

        series.views.push(views_unique);
        series.clones.push(clones_unique);
        series.views_total = series
            .views_total
            .saturating_add(numeric_field(&record, views_total_col));
        series.views_unique = series.views_unique.saturating_add(views_unique);
        series.clones_total = series
            .clones_total
            .saturating_add(numeric_field(&record, clones_total_col));
        series.clones_unique = series.clones_unique.saturating_add(clones_unique);
    }

    Ok(series)
}
