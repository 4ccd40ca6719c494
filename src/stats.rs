use serde::{Deserialize, Serialize};

/// Traffic and popularity figures for one monitored repository.
///
/// All series are in ascending chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub name: String,
    pub full_name: String,
    pub stars: i64,
    pub forks: i64,
    pub views_total: i64,
    pub views_unique: i64,
    pub clones_total: i64,
    pub clones_unique: i64,
    pub views_series: Vec<i64>,
    pub clones_series: Vec<i64>,
    pub stars_series: Vec<i64>,
    pub forks_series: Vec<i64>,
    pub stars_growth: i64,
    pub forks_growth: i64,
    pub has_activity: bool,
}

impl RepoStats {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// Any nonzero unique traffic, stars or forks counts as activity.
    pub fn detect_activity(&self) -> bool {
        self.views_unique > 0 || self.clones_unique > 0 || self.stars > 0 || self.forks > 0
    }
}

/// Orders repositories by stars, then unique views, both descending.
///
/// The sort is stable so exact ties keep the caller's order.
pub fn sort_by_popularity(stats: &mut [RepoStats]) {
    stats.sort_by(|a, b| (b.stars, b.views_unique).cmp(&(a.stars, a.views_unique)));
}
