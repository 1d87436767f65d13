//! Sign-in view backed by the auth remote's `Login` module.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::{self, Services, Stores};
use crate::components::remote_slot::{RemoteEvent, RemoteSlot};
use crate::net::types::Credentials;
use crate::remote::LOGIN;

pub const LOGIN_EVENT: &str = "login";

#[component]
pub fn SignInPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let services = expect_context::<Services>();
    let navigate = use_navigate();

    let on_event = Callback::new(move |event: RemoteEvent| {
        let Some(credentials) = event.payload::<Credentials>() else {
            return;
        };
        let services = services.clone();
        let navigate = navigate.clone();
        crate::util::task::spawn(async move {
            let go = move |path: &str| navigate(path, leptos_router::NavigateOptions::default());
            actions::session::login(&services.api, &services.tokens, stores, credentials, go).await;
        });
    });

    view! {
        <main class="auth">
            <RemoteSlot spec=LOGIN attrs=Signal::derive(Vec::new) events=&[LOGIN_EVENT] on_event/>
        </main>
    }
}
