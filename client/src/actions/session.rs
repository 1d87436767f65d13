//! Session flows: token validation, login, registration, logout and
//! profile updates.
//!
//! ERROR HANDLING
//! ==============
//! - Startup validation failure: token removed, session stays logged out,
//!   logged only.
//! - Login/register failure: `InfoTooltip(Fail)` notice.
//! - Profile/avatar failure: logged only, state untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::{HOME_PATH, SIGN_IN_PATH, Stores};
use crate::net::api::{AuthApi, ProfileApi};
use crate::net::types::{AvatarUpdate, Credentials, UserUpdate};
use crate::state::session::SessionState;
use crate::state::ui::NoticeStatus;
use crate::util::token_store::TokenStore;

/// Read the persisted token and mark validation as in flight.
///
/// Runs synchronously during app setup so the protected route shows its
/// loading state instead of redirecting before validation starts.
pub fn begin_bootstrap<T: TokenStore>(tokens: &T, stores: Stores) -> Option<String> {
    let token = tokens.load()?;
    stores.session.update(|s| s.checking = true);
    Some(token)
}

/// Validate `token` once against the auth service.
pub async fn validate_token<A, T>(auth: &A, tokens: &T, stores: Stores, token: String, navigate: impl Fn(&str))
where
    A: AuthApi,
    T: TokenStore,
{
    match auth.check_token(&token).await {
        Ok(owner) => {
            stores.session.update(|s| s.sign_in(&owner.email, Some(token)));
            navigate(HOME_PATH);
        }
        Err(e) => {
            tokens.clear();
            stores.session.update(SessionState::sign_out);
            leptos::logging::warn!("stored token rejected: {e}");
        }
    }
}

/// Startup token check: at most one validation, no retry.
pub async fn bootstrap<A, T>(auth: &A, tokens: &T, stores: Stores, navigate: impl Fn(&str))
where
    A: AuthApi,
    T: TokenStore,
{
    if let Some(token) = begin_bootstrap(tokens, stores) {
        validate_token(auth, tokens, stores, token, navigate).await;
    }
}

pub async fn login<A, T>(auth: &A, tokens: &T, stores: Stores, credentials: Credentials, navigate: impl Fn(&str))
where
    A: AuthApi,
    T: TokenStore,
{
    match auth.login(&credentials).await {
        Ok(signed_in) => {
            tokens.save(&signed_in.token);
            stores.session.update(|s| s.sign_in(&credentials.email, Some(signed_in.token)));
            navigate(HOME_PATH);
        }
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            stores.ui.update(|ui| ui.notify(NoticeStatus::Fail));
        }
    }
}

/// Create an account. Success does not sign in; it sends the user to sign-in.
pub async fn register<A: AuthApi>(auth: &A, stores: Stores, credentials: Credentials, navigate: impl Fn(&str)) {
    match auth.register(&credentials).await {
        Ok(account) => {
            leptos::logging::log!("registered {}", account.email);
            stores.ui.update(|ui| ui.notify(NoticeStatus::Success));
            navigate(SIGN_IN_PATH);
        }
        Err(e) => {
            leptos::logging::warn!("registration failed: {e}");
            stores.ui.update(|ui| ui.notify(NoticeStatus::Fail));
        }
    }
}

/// Drop the token and leave the protected view in one synchronous step.
pub fn logout<T: TokenStore>(tokens: &T, stores: Stores, navigate: impl Fn(&str)) {
    tokens.clear();
    stores.session.update(SessionState::sign_out);
    navigate(SIGN_IN_PATH);
}

pub async fn update_user<P: ProfileApi>(profile: &P, stores: Stores, update: UserUpdate) {
    match profile.set_user_info(&update).await {
        Ok(user) => {
            stores.session.update(|s| s.current_user = user);
            stores.close_all_popups();
        }
        Err(e) => leptos::logging::warn!("profile update failed: {e}"),
    }
}

pub async fn update_avatar<P: ProfileApi>(profile: &P, stores: Stores, update: AvatarUpdate) {
    match profile.set_user_avatar(&update).await {
        Ok(user) => {
            stores.session.update(|s| s.current_user = user);
            stores.close_all_popups();
        }
        Err(e) => leptos::logging::warn!("avatar update failed: {e}"),
    }
}
