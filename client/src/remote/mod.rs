//! Runtime resolution of remote UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration and the profile/card editors are deployed separately
//! and resolved by name when a view first needs them. `ModuleRegistry` maps a
//! name to a resolver and memoizes the outcome for the life of the page,
//! failures included: a name that fell back once keeps falling back without
//! another network attempt.
//!
//! ERROR HANDLING
//! ==============
//! A failed resolution is logged and turned into `RemoteModule::Fallback`.
//! Only the consuming slot shows the fallback; the rest of the app renders.


pub mod loader;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::config::HostConfig;
use crate::error::ModuleError;

/// Shown in place of a remote that could not be resolved.
pub const FALLBACK_MESSAGE: &str = "Компонент не загружен, обратитесь к администратору приложения.";
/// Shown while a remote is resolving.
pub const LOADING_MESSAGE: &str = "Загрузка...";

/// Static description of a remote module the host composes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteSpec {
    /// `scope/Module` name used by views.
    pub name: &'static str,
    /// Remote scope whose entry script defines the module.
    pub scope: &'static str,
    /// Custom element tag the module registers.
    pub element: &'static str,
}

pub const LOGIN: RemoteSpec = RemoteSpec { name: "auth/Login", scope: "auth", element: "mesto-login" };
pub const REGISTER: RemoteSpec = RemoteSpec { name: "auth/Register", scope: "auth", element: "mesto-register" };
pub const EDIT_PROFILE_POPUP: RemoteSpec =
    RemoteSpec { name: "profile/EditProfilePopup", scope: "profile", element: "mesto-edit-profile-popup" };
pub const EDIT_AVATAR_POPUP: RemoteSpec =
    RemoteSpec { name: "profile/EditAvatarPopup", scope: "profile", element: "mesto-edit-avatar-popup" };
pub const ADD_PLACE_POPUP: RemoteSpec =
    RemoteSpec { name: "cards/AddPlacePopup", scope: "cards", element: "mesto-add-place-popup" };
pub const IMAGE_POPUP: RemoteSpec =
    RemoteSpec { name: "cards/ImagePopup", scope: "cards", element: "mesto-image-popup" };
pub const CONFIRM_POPUP: RemoteSpec =
    RemoteSpec { name: "cards/PopupWithForm", scope: "cards", element: "mesto-popup-with-form" };

/// Every remote the host renders.
pub const HOST_REMOTES: [RemoteSpec; 7] =
    [LOGIN, REGISTER, EDIT_PROFILE_POPUP, EDIT_AVATAR_POPUP, ADD_PLACE_POPUP, IMAGE_POPUP, CONFIRM_POPUP];

/// A resolved remote, renderable as its custom element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteView {
    pub name: String,
    pub element: String,
}

/// Outcome of resolving a remote module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteModule {
    Resolved(RemoteView),
    Fallback,
}

pub type ResolveFuture = LocalBoxFuture<'static, Result<RemoteView, ModuleError>>;
type Resolver = Arc<dyn Fn() -> ResolveFuture + Send + Sync>;

enum Slot {
    /// Resolution in flight; consumers that arrived meanwhile wait here.
    Pending(Vec<oneshot::Sender<RemoteModule>>),
    Ready(RemoteModule),
}

#[derive(Default)]
struct RegistryInner {
    resolvers: HashMap<String, Resolver>,
    slots: HashMap<String, Slot>,
}

/// Name → resolver map with per-name memoization.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        let mut names: Vec<&String> = inner.resolvers.keys().collect();
        names.sort();
        f.debug_struct("ModuleRegistry").field("remotes", &names).finish()
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a browser loader for every `HOST_REMOTES` entry.
    pub fn for_host(config: &HostConfig) -> Self {
        let registry = Self::new();
        for spec in HOST_REMOTES {
            let entry_url = config.entry_url(spec.scope).map(str::to_owned);
            let timeout_ms = config.remote_timeout_ms;
            registry.register(spec.name, move || {
                let entry_url = entry_url.clone();
                async move {
                    let entry_url = entry_url.ok_or_else(|| ModuleError::MissingEntry(spec.scope.to_owned()))?;
                    loader::load_remote(spec, &entry_url, timeout_ms).await
                }
                .boxed_local()
            });
        }
        registry
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register (or replace) the resolver for `name`.
    pub fn register<F>(&self, name: &str, resolver: F)
    where
        F: Fn() -> ResolveFuture + Send + Sync + 'static,
    {
        self.lock().resolvers.insert(name.to_owned(), Arc::new(resolver));
    }

    /// Memoized outcome for `name`, if resolution already finished.
    pub fn cached(&self, name: &str) -> Option<RemoteModule> {
        match self.lock().slots.get(name) {
            Some(Slot::Ready(module)) => Some(module.clone()),
            _ => None,
        }
    }

    /// Resolve `name`, running its resolver at most once per registry.
    ///
    /// Callers arriving while the first resolution is in flight share its
    /// outcome. The returned future must be driven to completion (the host
    /// spawns it) or waiters on the same name never wake.
    pub fn resolve(&self, name: &str) -> LocalBoxFuture<'static, RemoteModule> {
        let mut inner = self.lock();
        match inner.slots.get_mut(name) {
            Some(Slot::Ready(module)) => return future::ready(module.clone()).boxed_local(),
            Some(Slot::Pending(waiters)) => {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                return rx.map(|outcome| outcome.unwrap_or(RemoteModule::Fallback)).boxed_local();
            }
            None => {}
        }

        let resolver = inner.resolvers.get(name).cloned();
        inner.slots.insert(name.to_owned(), Slot::Pending(Vec::new()));
        drop(inner);

        let guard = PendingGuard { registry: Some(self.clone()), name: name.to_owned() };
        async move {
            let name = guard.name.clone();
            let outcome = match resolver {
                Some(resolver) => resolver().await,
                None => Err(ModuleError::Unregistered(name.clone())),
            };
            let module = match outcome {
                Ok(view) => RemoteModule::Resolved(view),
                Err(e) => {
                    leptos::logging::warn!("remote module {name} unavailable: {e}");
                    RemoteModule::Fallback
                }
            };
            guard.finish(module.clone());
            module
        }
        .boxed_local()
    }

    fn settle(&self, name: &str, module: RemoteModule) {
        let previous = self.lock().slots.insert(name.to_owned(), Slot::Ready(module.clone()));
        if let Some(Slot::Pending(waiters)) = previous {
            for waiter in waiters {
                let _ = waiter.send(module.clone());
            }
        }
    }
}

/// Settles an in-flight resolution as `Fallback` if its future is dropped
/// before finishing, so waiters and later callers never see `Pending` forever.
struct PendingGuard {
    registry: Option<ModuleRegistry>,
    name: String,
}

impl PendingGuard {
    fn finish(mut self, module: RemoteModule) {
        if let Some(registry) = self.registry.take() {
            registry.settle(&self.name, module);
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.take() {
            leptos::logging::warn!("remote module {} resolution abandoned", self.name);
            registry.settle(&self.name, RemoteModule::Fallback);
        }
    }
}
