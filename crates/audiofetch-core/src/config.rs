use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Desktop browser identification sent with every request. Some asset hosts
/// reject libcurl's default `User-Agent`.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP options for the batch fetcher. Loaded from TOML only when the CLI is
/// given `--config`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Follow 3xx redirects (up to 10 hops).
    pub follow_redirects: bool,
    /// Connect timeout in seconds. None = libcurl default.
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds. None = no limit.
    pub timeout_secs: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            follow_redirects: true,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl FetchOptions {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load fetch options from a TOML file.
pub fn load_from_path(path: &Path) -> Result<FetchOptions> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let opts: FetchOptions = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded fetch options from {}", path.display());
    Ok(opts)
}
