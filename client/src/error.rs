//! Error types for collaborator calls and remote module resolution.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors are fatal. Call sites catch them where the request was
//! issued and either log, raise the login/register notice, or render the
//! remote fallback view.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a request to the auth, profile or cards service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("request rejected with status {status}")]
    Status { status: u16 },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Failure to resolve a named remote module.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    /// No resolver is registered under this module name.
    #[error("remote module {0} is not registered")]
    Unregistered(String),

    /// No entry URL is configured for the module's scope.
    #[error("no remote entry configured for scope {0}")]
    MissingEntry(String),

    /// The remote entry script failed to load.
    #[error("remote entry {url} failed to load")]
    EntryLoad { url: String },

    /// The entry loaded but never defined the module's element.
    #[error("remote element <{element}> not defined within {timeout_ms} ms")]
    Timeout { element: String, timeout_ms: u32 },

    /// A required browser API was missing.
    #[error("browser api unavailable: {0}")]
    Browser(String),
}
