//! # Fetch Configuration
//!
//! The only tunable is the `User-Agent` presented to the remote host. It
//! defaults to a fixed desktop Chrome string and can be overridden with
//! `DOCFETCH_USER_AGENT` (a `.env` file is honored by the CLI via `dotenvy`).

use std::env;

/// Environment variable that overrides the spoofed user agent.
pub const USER_AGENT_ENV: &str = "DOCFETCH_USER_AGENT";

/// Browser user agent sent by default, to get past trivial bot filtering.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_agent = lookup(USER_AGENT_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        Self { user_agent }
    }
}
