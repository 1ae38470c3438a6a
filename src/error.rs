//! Console error type.
//!
//! ERROR HANDLING
//! ==============
//! Startup variants (`MissingToken`, `AuthFailed`, `ComponentInit`) end the
//! session and send the user back to login. `Send` and `Realtime` are
//! recoverable: they are logged and surfaced as a toast or swallowed.

/// Errors produced by console bootstrap, collaborators, and send actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// No auth token is stored for this browser.
    #[error("no authentication token")]
    MissingToken,

    /// The stored token was rejected or the profile fetch failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Channel state or another startup component failed to initialize.
    #[error("component initialization failed: {0}")]
    ComponentInit(String),

    /// The realtime transport could not be opened.
    #[error("realtime connection failed: {0}")]
    Realtime(String),

    /// A per-channel send action failed.
    #[error("send failed: {0}")]
    Send(String),

    /// The backend answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Api { status: u16 },

    /// A configuration value could not be parsed or is out of range.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Whether this error ends the session and forces re-authentication.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingToken | Self::AuthFailed(_) | Self::ComponentInit(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
