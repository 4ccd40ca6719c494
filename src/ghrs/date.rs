use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%dT%H:%M:%S%:z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a CSV timestamp into a naive date-time.
///
/// Offsets are accepted but dropped, keeping the wall-clock time as written.
/// Returns `None` for empty or unrecognised input.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Trailing N-day period ending at an explicit evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub now: NaiveDateTime,
    pub days: i64,
}

impl Window {
    pub fn new(now: NaiveDateTime, days: i64) -> Self {
        Self { now, days }
    }

    pub fn cutoff(&self) -> NaiveDateTime {
        self.now - Duration::days(self.days)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.cutoff() && at <= self.now
    }

    pub fn at_or_after_cutoff(&self, at: NaiveDateTime) -> bool {
        at >= self.cutoff()
    }
}
