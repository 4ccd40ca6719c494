use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{info, warn};

use super::{
    read_cumulative_series, read_views_clones, Window, DATA_DIR, FORKS_COLUMN, FORKS_FILE,
    STARGAZERS_FILE, STARS_COLUMN, TRAFFIC_FILE,
};
use crate::stats::{sort_by_popularity, RepoStats};

pub const DEFAULT_TRAFFIC_DAYS: i64 = 14;
pub const DEFAULT_GROWTH_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    pub now: NaiveDateTime,
    pub traffic_days: i64,
    pub growth_days: i64,
}

impl CollectOptions {
    fn traffic_window(&self) -> Window {
        Window::new(self.now, self.traffic_days)
    }

    fn growth_window(&self) -> Window {
        Window::new(self.now, self.growth_days)
    }
}

/// Builds one record per `owner/name` spec, sorted by popularity.
///
/// Repositories are read one at a time in input order. Missing data never
/// drops a repository; it just leaves its counters at zero.
pub fn collect_repo_stats(
    workspace_root: &Path,
    repos: &[String],
    options: &CollectOptions,
) -> Vec<RepoStats> {
    let mut stats: Vec<RepoStats> = repos
        .iter()
        .map(|spec| collect_one(workspace_root, spec, options))
        .collect();

    sort_by_popularity(&mut stats);
    stats
}

fn collect_one(workspace_root: &Path, spec: &str, options: &CollectOptions) -> RepoStats {
    let mut stats = RepoStats::new(short_name(spec), spec);
    let data_dir = data_dir(workspace_root, spec);

    let traffic = read_views_clones(&data_dir.join(TRAFFIC_FILE), &options.traffic_window());
    stats.views_series = traffic.views;
    stats.clones_series = traffic.clones;
    stats.views_total = traffic.views_total;
    stats.views_unique = traffic.views_unique;
    stats.clones_total = traffic.clones_total;
    stats.clones_unique = traffic.clones_unique;

    let growth_window = options.growth_window();

    let stars = read_cumulative_series(
        &data_dir.join(STARGAZERS_FILE),
        STARS_COLUMN,
        &growth_window,
    );
    stats.stars_series = stars.series;
    stats.stars = stars.current;
    stats.stars_growth = stars.growth;

    let forks =
        read_cumulative_series(&data_dir.join(FORKS_FILE), FORKS_COLUMN, &growth_window);
    stats.forks_series = forks.series;
    stats.forks = forks.current;
    stats.forks_growth = forks.growth;

    stats.has_activity = stats.detect_activity();

    info!(
        "{spec}: {} stars, {} forks, {} unique views, {} unique clones",
        stats.stars, stats.forks, stats.views_unique, stats.clones_unique
    );

    stats
}

fn short_name(spec: &str) -> &str {
    match spec.split('/').nth(1) {
        Some(name) => name,
        None => {
            warn!("Repository spec {spec:?} is not in owner/name form");
            spec
        }
    }
}

fn data_dir(workspace_root: &Path, spec: &str) -> PathBuf {
    workspace_root.join(spec).join(DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn options() -> CollectOptions {
        let now = NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        CollectOptions {
            now,
            traffic_days: DEFAULT_TRAFFIC_DAYS,
            growth_days: DEFAULT_GROWTH_DAYS,
        }
    }

    fn write_data(root: &Path, spec: &str, file: &str, contents: &str) {
        let dir = root.join(spec).join(DATA_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), contents).unwrap();
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("octo/widget"), "widget");
        assert_eq!(short_name("widget"), "widget");
        assert_eq!(short_name("octo/widget/extra"), "widget");
    }

    #[test]
    fn test_collect_populated_and_missing_repos() {
        let root = tempfile::tempdir().unwrap();
        write_data(
            root.path(),
            "octo/busy",
            TRAFFIC_FILE,
            "time_iso8601,views_total,views_unique,clones_total,clones_unique\n\
             2024-06-20 00:00:00+00:00,30,10,6,2\n\
             2024-06-21 00:00:00+00:00,40,15,8,3\n",
        );
        write_data(
            root.path(),
            "octo/busy",
            STARGAZERS_FILE,
            "time_iso8601,stars_cumulative\n2024-01-01,4\n2024-05-01,9\n",
        );
        write_data(
            root.path(),
            "octo/busy",
            FORKS_FILE,
            "time_iso8601,forks_cumulative\n2024-05-01,1\n2024-06-01,2\n",
        );

        let repos = vec!["octo/quiet".to_string(), "octo/busy".to_string()];
        let stats = collect_repo_stats(root.path(), &repos, &options());

        assert_eq!(stats.len(), 2);

        let busy = &stats[0];
        assert_eq!(busy.name, "busy");
        assert_eq!(busy.full_name, "octo/busy");
        assert_eq!(busy.views_series, vec![10, 15]);
        assert_eq!(busy.clones_series, vec![2, 3]);
        assert_eq!(busy.views_total, 70);
        assert_eq!(busy.views_unique, 25);
        assert_eq!(busy.clones_total, 14);
        assert_eq!(busy.clones_unique, 5);
        assert_eq!(busy.stars, 9);
        assert_eq!(busy.stars_series, vec![9]);
        assert_eq!(busy.stars_growth, 5);
        assert_eq!(busy.forks, 2);
        assert_eq!(busy.forks_growth, 1);
        assert!(busy.has_activity);

        let quiet = &stats[1];
        assert_eq!(quiet.name, "quiet");
        assert_eq!(quiet.stars, 0);
        assert!(quiet.views_series.is_empty());
        assert!(!quiet.has_activity);
    }

    #[test]
    fn test_collect_sorts_by_stars_then_views() {
        let root = tempfile::tempdir().unwrap();
        for (spec, stars, views) in [("o/a", 5, 10), ("o/b", 5, 20), ("o/c", 10, 0)] {
            write_data(
                root.path(),
                spec,
                STARGAZERS_FILE,
                &format!("time_iso8601,stars_cumulative\n2024-06-01,{stars}\n"),
            );
            write_data(
                root.path(),
                spec,
                TRAFFIC_FILE,
                &format!(
                    "time_iso8601,views_total,views_unique,clones_total,clones_unique\n\
                     2024-06-25,{views},{views},0,0\n"
                ),
            );
        }

        let repos: Vec<String> = ["o/a", "o/b", "o/c"].iter().map(ToString::to_string).collect();
        let stats = collect_repo_stats(root.path(), &repos, &options());

        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn test_collect_honours_window_options() {
        let root = tempfile::tempdir().unwrap();
        write_data(
            root.path(),
            "o/r",
            TRAFFIC_FILE,
            "time_iso8601,views_total,views_unique,clones_total,clones_unique\n\
             2024-06-10,5,5,0,0\n\
             2024-06-29,1,1,0,0\n",
        );

        let opts = CollectOptions {
            traffic_days: 7,
            ..options()
        };
        let stats = collect_repo_stats(root.path(), &["o/r".to_string()], &opts);

        assert_eq!(stats[0].views_series, vec![1]);
    }
}
