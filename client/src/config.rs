//! Runtime configuration shared by the host server and the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `HostConfig` from its environment and serializes it into
//! a `<meta>` tag in the SSR shell. The hydrated app reads the tag back, so the
//! WASM bundle never bakes in service URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `name` attribute of the `<meta>` tag carrying the serialized config.
pub const CONFIG_META_NAME: &str = "mesto-host-config";
/// `localStorage` key of the persisted auth token.
pub const DEFAULT_TOKEN_KEY: &str = "jwt";
pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_AUTH_URL: &str = "/auth";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u32 = 10_000;

/// Remote scopes the host composes.
pub const REMOTE_SCOPES: [&str; 3] = ["auth", "profile", "cards"];

/// Where a remote scope's entry script is served from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub scope: String,
    pub entry_url: String,
}

/// Service endpoints and remote registry for one deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Base URL of the profile + cards service.
    pub api_url: String,
    /// Static `authorization` header value for the profile + cards service.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Base URL of the auth service.
    pub auth_url: String,
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_remote_timeout_ms")]
    pub remote_timeout_ms: u32,
    #[serde(default)]
    pub remotes: Vec<RemoteEntry>,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_owned()
}

fn default_remote_timeout_ms() -> u32 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

/// Conventional entry URL for a scope served next to the host.
pub fn default_entry_url(scope: &str) -> String {
    format!("/remotes/{scope}/remoteEntry.js")
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            api_token: None,
            auth_url: DEFAULT_AUTH_URL.to_owned(),
            token_key: default_token_key(),
            remote_timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            remotes: REMOTE_SCOPES
                .iter()
                .map(|scope| RemoteEntry { scope: (*scope).to_owned(), entry_url: default_entry_url(scope) })
                .collect(),
        }
    }
}

impl HostConfig {
    /// Entry URL configured for `scope`, if any.
    pub fn entry_url(&self, scope: &str) -> Option<&str> {
        self.remotes
            .iter()
            .find(|remote| remote.scope == scope)
            .map(|remote| remote.entry_url.as_str())
    }

    /// Serialize for the shell `<meta>` tag.
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the shell `<meta>` tag content.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a serialized `HostConfig`.
    pub fn from_meta_content(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the config injected by the server, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|meta| meta.get_attribute("content"));
            match raw.as_deref().map(Self::from_meta_content) {
                Some(Ok(config)) => return config,
                Some(Err(e)) => leptos::logging::warn!("host config meta unreadable, using defaults: {e}"),
                None => leptos::logging::warn!("host config meta missing, using defaults"),
            }
        }
        Self::default()
    }
}
