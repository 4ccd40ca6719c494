//! Aggregate dashboard page.
//!
//! Active repositories get a full card with traffic and growth sparklines;
//! inactive ones ("crickets") are listed compactly at the bottom.

use chrono::{DateTime, Utc};

use super::html::{format_number, html_escape, LinkBase};
use super::sparkline::{Sparkline, CLONES_COLOR, FORKS_COLOR, STARS_COLOR, VIEWS_COLOR};
use super::style::inline_css;
use crate::stats::RepoStats;

pub struct Dashboard<'a> {
    pub links: &'a LinkBase,
    pub generated_at: DateTime<Utc>,
    pub traffic_days: i64,
    pub growth_days: i64,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Totals {
    stars: i64,
    forks: i64,
    views_unique: i64,
    clones_unique: i64,
}

impl Totals {
    fn of(stats: &[RepoStats]) -> Self {
        stats.iter().fold(Self::default(), |acc, s| Self {
            stars: acc.stars.saturating_add(s.stars),
            forks: acc.forks.saturating_add(s.forks),
            views_unique: acc.views_unique.saturating_add(s.views_unique),
            clones_unique: acc.clones_unique.saturating_add(s.clones_unique),
        })
    }
}

impl Dashboard<'_> {
    pub fn render(&self, stats: &[RepoStats]) -> String {
        let (active, crickets): (Vec<&RepoStats>, Vec<&RepoStats>) =
            stats.iter().partition(|s| s.has_activity);

        let cards = active
            .iter()
            .map(|repo| self.render_repo_card(repo))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Repository Statistics Dashboard</title>
  <style>{css}</style>
</head>
<body>
  <div class="container">
    {header}

    <div class="cards-grid">
      {cards}
    </div>

    {crickets}

    {footer}
  </div>
</body>
</html>
"#,
            css = inline_css(),
            header = self.render_header(stats),
            cards = cards,
            crickets = self.render_crickets_section(&crickets),
            footer = self.render_footer(stats.len()),
        )
    }

    fn render_header(&self, stats: &[RepoStats]) -> String {
        let totals = Totals::of(stats);
        let views = sum_aligned(stats.iter().map(|s| s.views_series.as_slice()));
        let clones = sum_aligned(stats.iter().map(|s| s.clones_series.as_slice()));
        let trend = Sparkline::default()
            .size(200, 40)
            .colors(VIEWS_COLOR, CLONES_COLOR)
            .render(&views, Some(&clones));

        format!(
            r#"<div class="dashboard-header">
      <h1 class="header-title">Repository Statistics</h1>
      <div class="header-stats">
        <div class="header-stat">
          <span class="header-stat-value">{stars}</span>
          <span class="header-stat-label">total stars</span>
        </div>
        <div class="header-stat">
          <span class="header-stat-value">{forks}</span>
          <span class="header-stat-label">total forks</span>
        </div>
        <div class="header-stat">
          <span class="header-stat-value">{views}</span>
          <span class="header-stat-label">views ({days}d)</span>
        </div>
        <div class="header-stat">
          <span class="header-stat-value">{clones}</span>
          <span class="header-stat-label">clones ({days}d)</span>
        </div>
        <div class="header-sparkline">
          <span class="header-stat-label">traffic trend</span>
          {trend}
        </div>
      </div>
    </div>"#,
            stars = totals.stars,
            forks = totals.forks,
            views = format_number(totals.views_unique),
            clones = format_number(totals.clones_unique),
            days = self.traffic_days,
        )
    }

    fn render_repo_card(&self, repo: &RepoStats) -> String {
        let traffic = Sparkline::default()
            .colors(VIEWS_COLOR, CLONES_COLOR)
            .render(&repo.views_series, Some(&repo.clones_series));
        let growth = Sparkline::default()
            .colors(STARS_COLOR, FORKS_COLOR)
            .cumulative(true)
            .render(&repo.stars_series, Some(&repo.forks_series));

        format!(
            r#"
    <a href="{href}" class="card-link" title="{full_name}">
      <div class="card">
        <div class="card-header">
          <span class="repo-name">{name}</span>
          <span class="repo-stats">
            <span class="stat">⭐ {stars}</span>
            <span class="stat">🍴 {forks}</span>
          </span>
        </div>
        <div class="card-body">
          <div class="chart-section">
            <div class="chart-label">Traffic <span class="period">({traffic_days}d)</span></div>
            {traffic}
            <div class="chart-stats">
              <span class="views">👁 {views}</span>
              <span class="clones">📋 {clones}</span>
            </div>
          </div>
          <div class="chart-section">
            <div class="chart-label">Growth <span class="period">({growth_days}d)</span></div>
            {growth}
            <div class="chart-stats">
              {growth_text}
            </div>
          </div>
        </div>
      </div>
    </a>
    "#,
            href = html_escape(&self.links.repo_href(&repo.name)),
            full_name = html_escape(&repo.full_name),
            name = html_escape(&repo.name),
            stars = repo.stars,
            forks = repo.forks,
            traffic_days = self.traffic_days,
            views = format_number(repo.views_unique),
            clones = format_number(repo.clones_unique),
            growth_days = self.growth_days,
            growth_text = render_growth(repo),
        )
    }

    fn render_cricket_card(&self, repo: &RepoStats) -> String {
        format!(
            r#"
    <a href="{href}" class="cricket-link" title="{full_name}">
      <div class="cricket-card">
        <span class="cricket-name">{name}</span>
        <span class="cricket-stats">⭐ {stars}</span>
        <span class="cricket-arrow">→</span>
      </div>
    </a>
    "#,
            href = html_escape(&self.links.repo_href(&repo.name)),
            full_name = html_escape(&repo.full_name),
            name = html_escape(&repo.name),
            stars = repo.stars,
        )
    }

    fn render_crickets_section(&self, crickets: &[&RepoStats]) -> String {
        if crickets.is_empty() {
            return String::new();
        }

        let cards = crickets
            .iter()
            .map(|repo| self.render_cricket_card(repo))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<div class="crickets-section">
      <h2 class="crickets-header">🦗 Crickets</h2>
      <div class="crickets-grid">
        {cards}
      </div>
    </div>"#
        )
    }

    fn render_footer(&self, count: usize) -> String {
        format!(
            r#"<div class="dashboard-footer">
      Last updated: {timestamp} · {count} repositories
    </div>"#,
            timestamp = self.generated_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }
}

fn render_growth(repo: &RepoStats) -> String {
    let parts: Vec<String> = [(repo.stars_growth, "stars"), (repo.forks_growth, "forks")]
        .into_iter()
        .filter(|&(delta, _)| delta != 0)
        .map(|(delta, label)| {
            let class = if delta > 0 { "positive" } else { "negative" };
            format!(r#"<span class="growth {class}">{delta:+} {label}</span>"#)
        })
        .collect();

    if parts.is_empty() {
        r#"<span class="neutral">—</span>"#.to_string()
    } else {
        parts.join("\n              ")
    }
}

/// Element-wise sum aligned at index 0, as long as the longest input.
fn sum_aligned<'a>(series: impl Iterator<Item = &'a [i64]>) -> Vec<i64> {
    series.fold(Vec::new(), |mut acc, values| {
        if acc.len() < values.len() {
            acc.resize(values.len(), 0);
        }
        for (slot, v) in acc.iter_mut().zip(values) {
            *slot = slot.saturating_add(*v);
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 9, 5, 0).unwrap()
    }

    fn render(stats: &[RepoStats]) -> String {
        let links = LinkBase::Relative;
        Dashboard {
            links: &links,
            generated_at: generated_at(),
            traffic_days: 14,
            growth_days: 90,
        }
        .render(stats)
    }

    fn active(name: &str) -> RepoStats {
        RepoStats {
            stars: 12,
            forks: 3,
            views_unique: 1500,
            clones_unique: 40,
            views_series: vec![500, 1000],
            clones_series: vec![10, 30],
            stars_series: vec![10, 12],
            forks_series: vec![3],
            stars_growth: 2,
            has_activity: true,
            ..RepoStats::new(name, format!("octo/{name}"))
        }
    }

    #[test]
    fn test_sum_aligned_pads_to_longest() {
        let a = vec![1, 2, 3];
        let b = vec![10];
        let c: Vec<i64> = vec![];

        let sum = sum_aligned([a.as_slice(), b.as_slice(), c.as_slice()].into_iter());

        assert_eq!(sum, vec![11, 2, 3]);
    }

    #[test]
    fn test_sum_aligned_empty() {
        assert!(sum_aligned(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_totals() {
        let totals = Totals::of(&[active("a"), active("b"), RepoStats::new("c", "octo/c")]);

        assert_eq!(
            totals,
            Totals {
                stars: 24,
                forks: 6,
                views_unique: 3000,
                clones_unique: 80,
            }
        );
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        let big = RepoStats {
            stars: i64::MAX,
            views_unique: i64::MAX,
            views_series: vec![i64::MAX],
            ..RepoStats::new("big", "octo/big")
        };

        let totals = Totals::of(&[big.clone(), big.clone()]);
        let views = sum_aligned([big.views_series.as_slice(), big.views_series.as_slice()].into_iter());

        assert_eq!(totals.stars, i64::MAX);
        assert_eq!(totals.views_unique, i64::MAX);
        assert_eq!(views, vec![i64::MAX]);
    }

    #[test]
    fn test_render_growth_variants() {
        let mut repo = RepoStats::new("r", "o/r");
        assert_eq!(render_growth(&repo), r#"<span class="neutral">—</span>"#);

        repo.stars_growth = 4;
        assert_eq!(
            render_growth(&repo),
            r#"<span class="growth positive">+4 stars</span>"#
        );

        repo.stars_growth = 0;
        repo.forks_growth = -1;
        assert_eq!(
            render_growth(&repo),
            r#"<span class="growth negative">-1 forks</span>"#
        );
    }

    #[test]
    fn test_active_repo_gets_a_card() {
        let html = render(&[active("widget")]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="widget/" class="card-link""#));
        assert!(html.contains(r#"<span class="repo-name">widget</span>"#));
        assert!(html.contains("👁 1.5k"));
        assert!(html.contains("📋 40"));
        assert!(html.contains("+2 stars"));
        assert!(!html.contains(r#"<div class="crickets-section">"#));
    }

    #[test]
    fn test_inactive_repo_only_in_crickets() {
        let html = render(&[active("widget"), RepoStats::new("sleepy", "octo/sleepy")]);

        assert!(html.contains(r#"<div class="crickets-section">"#));
        assert!(html.contains(r#"<span class="cricket-name">sleepy</span>"#));
        assert!(!html.contains(r#"<span class="repo-name">sleepy</span>"#));
    }

    #[test]
    fn test_header_totals_and_footer() {
        let html = render(&[active("a"), active("b")]);

        assert!(html.contains(r#"<span class="header-stat-value">24</span>"#));
        assert!(html.contains(r#"<span class="header-stat-value">6</span>"#));
        assert!(html.contains(r#"<span class="header-stat-value">3.0k</span>"#));
        assert!(html.contains(r#"<span class="header-stat-value">80</span>"#));
        assert!(html.contains(r#"<svg viewBox="0 0 200 40" class="sparkline">"#));
        assert!(html.contains("Last updated: 2024-06-30 09:05 UTC · 2 repositories"));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut repo = active("<script>alert(1)</script>");
        repo.full_name = "octo/\"quoted\"".to_string();

        let html = render(&[repo]);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("title=\"octo/&quot;quoted&quot;\""));
    }

    #[test]
    fn test_links_use_prefix() {
        let links = LinkBase::parse("https://octo.github.io/stats").unwrap();
        let html = Dashboard {
            links: &links,
            generated_at: generated_at(),
            traffic_days: 14,
            growth_days: 90,
        }
        .render(&[active("widget")]);

        assert!(html.contains(r#"href="https://octo.github.io/stats/widget/""#));
    }

    #[test]
    fn test_empty_dashboard_still_renders() {
        let html = render(&[]);

        assert!(html.contains("no data"));
        assert!(html.contains("· 0 repositories"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
