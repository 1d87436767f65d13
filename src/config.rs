//! Host server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything except `PORT` ends up in the `HostConfig` that the SSR shell
//! serializes into the page, so the browser bundle and the server agree on
//! service URLs and remote entry scripts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use mesto_host_ui::config::{DEFAULT_REMOTE_TIMEOUT_MS, HostConfig, REMOTE_SCOPES, RemoteEntry, default_entry_url};

pub const DEFAULT_PORT: u16 = 3000;
/// Directory locally hosted remote bundles are served from, relative to the
/// working directory.
pub const DEFAULT_REMOTES_DIR: &str = "./remotes";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub remotes_dir: PathBuf,
    pub host: HostConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MESTO_API_URL`, `MESTO_AUTH_URL`: service base URLs
    /// - `MESTO_API_TOKEN`: `authorization` header for the API service
    /// - `MESTO_TOKEN_KEY`: `localStorage` key, default `jwt`
    /// - `MESTO_REMOTE_TIMEOUT_MS`: remote load budget, default 10000
    /// - `MESTO_REMOTE_AUTH`, `MESTO_REMOTE_PROFILE`, `MESTO_REMOTE_CARDS`:
    ///   entry script URLs, default `/remotes/<scope>/remoteEntry.js`
    /// - `MESTO_REMOTES_DIR`: directory served under `/remotes`, default `./remotes`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = HostConfig::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_var("PORT", var("PORT"), DEFAULT_PORT)?;
        let remotes_dir = PathBuf::from(var("MESTO_REMOTES_DIR").unwrap_or_else(|| DEFAULT_REMOTES_DIR.to_owned()));
        let remote_timeout_ms =
            parse_var("MESTO_REMOTE_TIMEOUT_MS", var("MESTO_REMOTE_TIMEOUT_MS"), DEFAULT_REMOTE_TIMEOUT_MS)?;
        if remote_timeout_ms == 0 {
            return Err(ConfigError::Invalid { var: "MESTO_REMOTE_TIMEOUT_MS", value: "0".to_owned() });
        }

        let remotes = REMOTE_SCOPES
            .iter()
            .map(|scope| RemoteEntry {
                scope: (*scope).to_owned(),
                entry_url: var(&format!("MESTO_REMOTE_{}", scope.to_ascii_uppercase()))
                    .unwrap_or_else(|| default_entry_url(scope)),
            })
            .collect();

        let host = HostConfig {
            api_url: var("MESTO_API_URL").map_or(defaults.api_url, |url| url.trim_end_matches('/').to_owned()),
            api_token: var("MESTO_API_TOKEN"),
            auth_url: var("MESTO_AUTH_URL").map_or(defaults.auth_url, |url| url.trim_end_matches('/').to_owned()),
            token_key: var("MESTO_TOKEN_KEY").unwrap_or(defaults.token_key),
            remote_timeout_ms,
            remotes,
        };

        Ok(Self { port, remotes_dir, host })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var: name, value }),
    }
}
