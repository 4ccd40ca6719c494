use url::Url;

use crate::error::{DashboardError, Result};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact count: thousands become `1.2k`.
pub fn format_number(n: i64) -> String {
    if n >= 1000 {
        #[allow(clippy::cast_precision_loss)]
        let thousands = n as f64 / 1000.0;
        format!("{thousands:.1}k")
    } else {
        n.to_string()
    }
}

/// Where per-repository report links point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkBase {
    Relative,
    Absolute(Url),
    Path(String),
}

impl LinkBase {
    /// An absolute URL is joined properly; anything else non-empty, including
    /// scheme-less hosts like `localhost:8000/stats`, is a path prefix.
    pub fn parse(prefix: &str) -> Result<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Ok(Self::Relative);
        }

        match Url::parse(prefix) {
            Ok(url) if url.cannot_be_a_base() => Ok(Self::path(prefix)),
            Ok(mut url) => {
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                Ok(Self::Absolute(url))
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::path(prefix)),
            Err(e) => Err(DashboardError::Config(format!(
                "Invalid URL prefix {prefix:?}: {e}"
            ))),
        }
    }

    fn path(prefix: &str) -> Self {
        Self::Path(prefix.trim_end_matches('/').to_string())
    }

    /// Link target for a repository's own report, unescaped.
    pub fn repo_href(&self, name: &str) -> String {
        match self {
            Self::Relative => format!("{name}/"),
            Self::Path(prefix) => format!("{prefix}/{name}/"),
            Self::Absolute(base) => base
                .join(&format!("{name}/"))
                .map_or_else(|_| format!("{base}{name}/"), String::from),
        }
    }
}
