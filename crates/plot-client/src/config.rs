//! Configuration for the plot client.
//!
//! Intentionally simple: defaults, overridable via a few environment
//! variables (CLI flags override these in turn):
//!
//! - `PLOT_BASE_URL`     (default: "http://127.0.0.1:8000")
//! - `PLOT_TIMEOUT_SECS` (default: "30")

use std::env;
use std::str::FromStr;

use anyhow::Context;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the plotting backend, without the `/D8TAVu` prefix
    /// (the endpoint paths carry it).
    pub base_url: String,

    /// Per-request timeout, in seconds. A request that exceeds it is a
    /// transport failure.
    pub timeout_secs: u64,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back to
    /// reasonable defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("PLOT_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let timeout_secs = read_env_or_default("PLOT_TIMEOUT_SECS", 30u64)?;

        Ok(Config {
            base_url,
            timeout_secs,
        })
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val.parse::<T>().with_context(|| format!("invalid {key}")),
        Err(_) => Ok(default),
    }
}
