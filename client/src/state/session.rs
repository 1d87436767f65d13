//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session actions (bootstrap, login, logout, profile
//! updates). Route guards and the header read it through context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Login state plus the profile of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    /// Email of the signed-in account; empty when logged out.
    pub email: String,
    /// Token persisted for the signed-in account.
    pub token: Option<String>,
    /// Profile loaded from the profile service.
    pub current_user: User,
    /// True while the startup token validation is in flight.
    pub checking: bool,
}

impl SessionState {
    /// Mark the session signed in as `email`.
    pub fn sign_in(&mut self, email: &str, token: Option<String>) {
        self.is_logged_in = true;
        self.email = email.to_owned();
        self.token = token;
        self.checking = false;
    }

    /// Reset the login fields. The loaded profile is kept.
    pub fn sign_out(&mut self) {
        self.is_logged_in = false;
        self.email.clear();
        self.token = None;
        self.checking = false;
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user.id
    }
}
