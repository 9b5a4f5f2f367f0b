//! Fetch configuration
//!
//! Defaults can be overridden through `PRODUCT_PARSER_*` environment
//! variables, and the CLI flags take precedence over both.

use std::time::Duration;

use log::warn;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Many storefronts reject requests without a browser-like user agent
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
/// 10 MiB; theme pages with inlined JSON routinely exceed 1 MiB
pub const DEFAULT_MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_MAX_RETRIES: u32 = 0;

pub const ENV_TIMEOUT_SECS: &str = "PRODUCT_PARSER_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "PRODUCT_PARSER_USER_AGENT";
pub const ENV_MAX_BODY_BYTES: &str = "PRODUCT_PARSER_MAX_BODY_BYTES";
pub const ENV_MAX_RETRIES: &str = "PRODUCT_PARSER_MAX_RETRIES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Whole-request timeout (connect, headers and body)
    pub timeout: Duration,
    pub user_agent: String,
    pub max_body_bytes: u64,
    /// Extra attempts after a timeout or transport error
    pub max_retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::default().apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup`; unparseable values keep the current setting
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_TIMEOUT_SECS) {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = lookup(ENV_USER_AGENT) {
            let ua = ua.trim();
            if !ua.is_empty() {
                self.user_agent = ua.to_string();
            }
        }
        if let Some(bytes) = parse_var::<u64, _>(&lookup, ENV_MAX_BODY_BYTES) {
            self.max_body_bytes = bytes;
        }
        if let Some(retries) = parse_var::<u32, _>(&lookup, ENV_MAX_RETRIES) {
            self.max_retries = retries;
        }
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
