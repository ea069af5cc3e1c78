use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CLUSTER_SELECTOR};
use crate::utils::normalize_base_url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub clusters: String,
    /// `None` leaves the HTTP client without a request timeout.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            normalize_base_url(&env_string(&lookup, "DASHBOARD_BASE_URL", DEFAULT_BASE_URL));
        let clusters = env_string(&lookup, "DASHBOARD_CLUSTERS", DEFAULT_CLUSTER_SELECTOR);
        let request_timeout = env_optional_u64(&lookup, "DASHBOARD_REQUEST_TIMEOUT_SECONDS")?
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs);

        Ok(Self {
            base_url,
            clusters,
            request_timeout,
        })
    }
}

fn env_string<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_optional_u64<F>(lookup: &F, name: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("Failed to parse {}={} as u64", name, value)),
        None => Ok(None),
    }
}
