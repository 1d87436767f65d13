//! Protected-route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route applies this gate on every render, so a logout hides the
//! protected view on the next paint.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

/// What the protected route renders for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGate {
    /// Startup token validation still running.
    Checking,
    Allow,
    RedirectToSignIn,
}

pub fn route_gate(state: &SessionState) -> RouteGate {
    if state.is_logged_in {
        RouteGate::Allow
    } else if state.checking {
        RouteGate::Checking
    } else {
        RouteGate::RedirectToSignIn
    }
}
