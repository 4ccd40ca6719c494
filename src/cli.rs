use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::error::{self, DashboardError};
use crate::ghrs::{collect_repo_stats, CollectOptions, DEFAULT_GROWTH_DAYS, DEFAULT_TRAFFIC_DAYS};
use crate::render::{Dashboard, LinkBase};

#[derive(Parser)]
#[command(name = "ghrs-dashboard")]
#[command(author, version, about = "Aggregate dashboard for GitHub repository statistics", long_about = None)]
pub struct Cli {
    /// JSON array of repositories, e.g. '["octo/widget","octo/gadget"]'
    repos_json: String,

    /// URL prefix that per-repository report links are built from
    ghpages_prefix: String,

    /// Output directory name on the GitHub Pages branch
    ghpages_dir: String,

    /// Directory holding one `owner/name` checkout per repository
    #[arg(env = "GHRS_WORKSPACE_ROOT")]
    workspace_root: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the collected statistics as JSON instead of the HTML dashboard
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Pretty print JSON output
    #[arg(short, long, default_value_t = false, requires = "json")]
    pretty: bool,

    /// Days of views/clones history to show
    #[arg(
        long,
        default_value_t = DEFAULT_TRAFFIC_DAYS,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    traffic_days: i64,

    /// Days of star/fork history to measure growth over
    #[arg(
        long,
        default_value_t = DEFAULT_GROWTH_DAYS,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    growth_days: i64,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let output = self.render(Utc::now())?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, output)?;
            info!("Dashboard written to: {}", output_path.display());
        } else {
            print!("{output}");
        }

        Ok(())
    }

    fn render(&self, now: DateTime<Utc>) -> Result<String> {
        let repos = parse_repos(&self.repos_json)?;
        let links = LinkBase::parse(&self.ghpages_prefix)?;
        let workspace_root = match &self.workspace_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        info!(
            "Collecting stats for {} repositories under {} (pages dir: {})",
            repos.len(),
            workspace_root.display(),
            self.ghpages_dir
        );

        let options = CollectOptions {
            now: now.naive_utc(),
            traffic_days: self.traffic_days,
            growth_days: self.growth_days,
        };
        let stats = collect_repo_stats(&workspace_root, &repos, &options);

        if self.json {
            let json_output = if self.pretty {
                serde_json::to_string_pretty(&stats)?
            } else {
                serde_json::to_string(&stats)?
            };
            return Ok(format!("{json_output}\n"));
        }

        let dashboard = Dashboard {
            links: &links,
            generated_at: now,
            traffic_days: self.traffic_days,
            growth_days: self.growth_days,
        };

        Ok(dashboard.render(&stats))
    }
}

fn parse_repos(json: &str) -> error::Result<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}
