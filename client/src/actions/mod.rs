//! State-mutating flows triggered by startup and user intents.
//!
//! ARCHITECTURE
//! ============
//! Actions are the only writers of the shared state signals. Each one issues
//! its request to a collaborator trait, waits for confirmation, then applies
//! the server's answer. Failures are caught here and never propagate into
//! views; see `session` and `cards` for the per-flow policy.
//!
//! There is no cancellation: a completion that lands after the user navigated
//! away still writes its result.

pub mod cards;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

use leptos::prelude::*;

use crate::config::HostConfig;
use crate::net::api::HttpApi;
use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::token_store::LocalTokenStore;

/// Path of the protected home view.
pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";

/// Handles to the shared state signals, injected into every action.
#[derive(Clone, Copy, Debug)]
pub struct Stores {
    pub session: RwSignal<SessionState>,
    pub cards: RwSignal<CardsState>,
    pub ui: RwSignal<UiState>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            cards: RwSignal::new(CardsState::default()),
            ui: RwSignal::new(UiState::default()),
        }
    }

    /// Provide the bundle as context; views read signals through it.
    pub fn provide(self) {
        provide_context(self);
    }

    pub fn close_all_popups(self) {
        self.ui.update(UiState::close_all);
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

/// Live collaborators used by views when they dispatch actions.
#[derive(Clone, Debug)]
pub struct Services {
    pub api: HttpApi,
    pub tokens: LocalTokenStore,
}

impl Services {
    pub fn new(config: &HostConfig) -> Self {
        Self { api: HttpApi::new(config), tokens: LocalTokenStore::new(config.token_key.clone()) }
    }
}
