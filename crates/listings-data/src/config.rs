//! Client configuration for the listings data service.

use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://data.staylist.app/api/1.1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_BASE_URL: &str = "STAYLIST_API_BASE_URL";
const ENV_API_TOKEN: &str = "STAYLIST_API_TOKEN";
const ENV_TIMEOUT_SECS: &str = "STAYLIST_API_TIMEOUT_SECS";

/// Configuration for [`ListingsApiClient`](crate::ListingsApiClient).
///
/// The base URL hosts two API roots: the data API under `/obj` (record
/// queries) and the workflow API under `/wf` (favorite mutations).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data service, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent on every request, if configured.
    pub api_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    ///
    /// Recognized variables: `STAYLIST_API_BASE_URL`, `STAYLIST_API_TOKEN`,
    /// `STAYLIST_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_token = env::var(ENV_API_TOKEN).ok().filter(|v| !v.is_empty());

        let timeout_secs = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_token,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Root of the data API (record queries).
    pub fn data_url(&self) -> String {
        format!("{}/obj", self.base_url)
    }

    /// Root of the workflow API (favorite mutations).
    pub fn workflow_url(&self) -> String {
        format!("{}/wf", self.base_url)
    }
}
