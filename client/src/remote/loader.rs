//! Browser loader for remote entry scripts.
//!
//! A remote scope ships one ES module entry script that defines a custom
//! element per exposed module. Loading a module injects the scope's entry
//! script (once per URL) and polls the custom element registry until the
//! module's element is defined, the script fails, or the timeout elapses.
//!
//! All DOM logic is gated behind `#[cfg(feature = "hydrate")]`; elsewhere
//! loading fails with `ModuleError::Browser`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use super::{RemoteSpec, RemoteView};
use crate::error::ModuleError;

/// Interval between custom element registry checks.
pub const POLL_INTERVAL_MS: u32 = 50;

/// Number of polls that fit in `timeout_ms`, at least one.
pub fn poll_budget(timeout_ms: u32) -> u32 {
    (timeout_ms / POLL_INTERVAL_MS).max(1)
}

#[cfg(feature = "hydrate")]
type FailureFlag = std::rc::Rc<std::cell::Cell<bool>>;

#[cfg(feature = "hydrate")]
thread_local! {
    /// Load-failure flags per injected entry URL.
    static ENTRY_FAILED: std::cell::RefCell<std::collections::HashMap<String, FailureFlag>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Load `spec` from `entry_url` and wait for its element to be defined.
///
/// # Errors
///
/// `EntryLoad` if the script errors, `Timeout` if the element never appears,
/// `Browser` if the DOM is unavailable.
pub async fn load_remote(spec: RemoteSpec, entry_url: &str, timeout_ms: u32) -> Result<RemoteView, ModuleError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| ModuleError::Browser("window".to_owned()))?;
        let document = window.document().ok_or_else(|| ModuleError::Browser("document".to_owned()))?;
        let registry = window.custom_elements();

        let view = RemoteView { name: spec.name.to_owned(), element: spec.element.to_owned() };
        if !registry.get(spec.element).is_undefined() {
            return Ok(view);
        }

        let failed = ENTRY_FAILED.with(|entries| {
            let mut entries = entries.borrow_mut();
            if let Some(flag) = entries.get(entry_url) {
                return Ok::<_, ModuleError>(flag.clone());
            }
            let flag = std::rc::Rc::new(std::cell::Cell::new(false));
            let script = document
                .create_element("script")
                .map_err(|_| ModuleError::Browser("create script".to_owned()))?
                .dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(|_| ModuleError::Browser("script element".to_owned()))?;
            script.set_type("module");
            script.set_src(entry_url);
            let on_error = {
                let flag = flag.clone();
                Closure::<dyn FnMut()>::new(move || flag.set(true))
            };
            script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_error.forget();
            let head = document.head().ok_or_else(|| ModuleError::Browser("head".to_owned()))?;
            head.append_child(&script)
                .map_err(|_| ModuleError::Browser("append script".to_owned()))?;
            entries.insert(entry_url.to_owned(), flag.clone());
            Ok(flag)
        })?;

        for _ in 0..poll_budget(timeout_ms) {
            if !registry.get(spec.element).is_undefined() {
                return Ok(view);
            }
            if failed.get() {
                return Err(ModuleError::EntryLoad { url: entry_url.to_owned() });
            }
            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
        Err(ModuleError::Timeout { element: spec.element.to_owned(), timeout_ms })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (spec, entry_url, timeout_ms);
        Err(ModuleError::Browser("remote modules load only in the browser".to_owned()))
    }
}
