//! Mount point for a remote UI module.
//!
//! SYSTEM CONTEXT
//! ==============
//! A slot asks the `ModuleRegistry` for its remote by name and renders one of
//! three things: the loading placeholder while resolution is in flight, the
//! fixed fallback when it failed, or the remote's custom element once it is
//! defined.
//!
//! DESIGN
//! ======
//! Props flow into the remote as string attributes, re-applied whenever the
//! `attrs` signal changes. Intents flow back as DOM `CustomEvent`s; the slot
//! listens for the names in `events` and hands each one to `on_event` with
//! its `detail` converted to JSON.
//!
//! SSR never resolves remotes, so the server always renders the loading
//! placeholder and hydration starts from the same markup.

#[cfg(test)]
#[path = "remote_slot_test.rs"]
mod remote_slot_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use crate::remote::{FALLBACK_MESSAGE, LOADING_MESSAGE, ModuleRegistry, RemoteModule, RemoteSpec, RemoteView};

/// Attribute name/value pairs pushed onto a remote element.
pub type RemoteAttrs = Vec<(&'static str, String)>;

/// An intent emitted by a remote element.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteEvent {
    pub name: String,
    pub detail: serde_json::Value,
}

impl RemoteEvent {
    pub fn new(name: impl Into<String>, detail: serde_json::Value) -> Self {
        Self { name: name.into(), detail }
    }

    /// Decode `detail` into a typed payload. Malformed payloads are logged and dropped.
    pub fn payload<T: DeserializeOwned>(&self) -> Option<T> {
        match serde_json::from_value(self.detail.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring malformed {} event: {e}", self.name);
                None
            }
        }
    }
}

/// Attribute value for a boolean flag.
pub fn flag(value: bool) -> String {
    if value { "true".to_owned() } else { "false".to_owned() }
}

/// Target for remote attribute writes.
pub trait AttrSink {
    /// # Errors
    ///
    /// Returns a description of why the attribute was rejected.
    fn set_attr(&self, name: &str, value: &str) -> Result<(), String>;
}

#[cfg(feature = "hydrate")]
impl AttrSink for web_sys::Element {
    fn set_attr(&self, name: &str, value: &str) -> Result<(), String> {
        self.set_attribute(name, value).map_err(|e| format!("{e:?}"))
    }
}

/// Write every attribute, logging each rejection. Returns how many were rejected.
pub fn apply_attrs(sink: &impl AttrSink, remote_name: &str, attrs: &[(&'static str, String)]) -> usize {
    let mut rejected = 0;
    for (name, value) in attrs {
        if let Err(e) = sink.set_attr(name, value) {
            leptos::logging::warn!("{remote_name} rejected attribute {name}: {e}");
            rejected += 1;
        }
    }
    rejected
}

/// Render the remote described by `spec`, or its loading/fallback stand-in.
#[component]
pub fn RemoteSlot(
    spec: RemoteSpec,
    #[prop(into)] attrs: Signal<RemoteAttrs>,
    events: &'static [&'static str],
    on_event: Callback<RemoteEvent>,
) -> impl IntoView {
    let registry = expect_context::<ModuleRegistry>();
    let module = RwSignal::new(registry.cached(spec.name));

    if module.get_untracked().is_none() {
        crate::util::task::spawn(async move {
            let resolved = registry.resolve(spec.name).await;
            module.set(Some(resolved));
        });
    }

    move || match module.get() {
        None => view! { <div class="remote-slot remote-slot--loading">{LOADING_MESSAGE}</div> }.into_any(),
        Some(RemoteModule::Fallback) => view! { <div class="error">{FALLBACK_MESSAGE}</div> }.into_any(),
        Some(RemoteModule::Resolved(remote)) => view! { <RemoteElement remote attrs events on_event/> }.into_any(),
    }
}

#[component]
fn RemoteElement(
    remote: RemoteView,
    attrs: Signal<RemoteAttrs>,
    events: &'static [&'static str],
    on_event: Callback<RemoteEvent>,
) -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let mounted = Rc::new(RefCell::new(None::<web_sys::Element>));
        Effect::new(move || {
            let Some(host) = host_ref.get() else {
                return;
            };
            let current = attrs.get();
            let mut slot = mounted.borrow_mut();
            if slot.is_none() {
                match mount_element(&host, &remote.element, events, on_event) {
                    Ok(element) => *slot = Some(element),
                    Err(e) => {
                        leptos::logging::warn!("failed to mount {}: {e:?}", remote.name);
                        return;
                    }
                }
            }
            if let Some(element) = slot.as_ref() {
                apply_attrs(element, &remote.name, &current);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (remote, attrs, events, on_event);

    view! { <div class="remote-slot" node_ref=host_ref></div> }
}

#[cfg(feature = "hydrate")]
fn mount_element(
    host: &web_sys::HtmlDivElement,
    tag: &str,
    events: &'static [&'static str],
    on_event: Callback<RemoteEvent>,
) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, closure::Closure};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let element = document.create_element(tag)?;

    for &name in events {
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let detail = ev
                .dyn_ref::<web_sys::CustomEvent>()
                .map_or(serde_json::Value::Null, |custom| detail_json(&custom.detail()));
            on_event.run(RemoteEvent::new(name, detail));
        });
        element.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())?;
        // Listener lives as long as the element.
        cb.forget();
    }

    host.append_child(&element)?;
    Ok(element)
}

#[cfg(feature = "hydrate")]
fn detail_json(detail: &wasm_bindgen::JsValue) -> serde_json::Value {
    if detail.is_undefined() || detail.is_null() {
        return serde_json::Value::Null;
    }
    js_sys::JSON::stringify(detail)
        .ok()
        .and_then(|raw| raw.as_string())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(serde_json::Value::Null)
}
