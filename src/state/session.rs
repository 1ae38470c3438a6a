//! Auth-session state for the signed-in agent.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors what the bootstrap learned during authentication so header and
//! composer components can render the agent's identity.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "unknown".to_owned())
    }
}
