//! Page header: logo plus the route-dependent account control.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::actions::{self, HOME_PATH, SIGN_IN_PATH, SIGN_UP_PATH, Services, Stores};

/// Account control shown in the header for a given path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderControl {
    /// Current email and a sign-out button.
    Account,
    Link { href: &'static str, label: &'static str },
    Empty,
}

pub fn header_control(path: &str) -> HeaderControl {
    match path {
        HOME_PATH => HeaderControl::Account,
        SIGN_IN_PATH => HeaderControl::Link { href: SIGN_UP_PATH, label: "Регистрация" },
        SIGN_UP_PATH => HeaderControl::Link { href: SIGN_IN_PATH, label: "Войти" },
        _ => HeaderControl::Empty,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let services = expect_context::<Services>();
    let location = use_location();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        actions::session::logout(&services.tokens, stores, move |path| {
            navigate(path, leptos_router::NavigateOptions::default());
        });
    };
    let email = move || stores.session.with(|s| s.email.clone());

    view! {
        <header class="header">
            <a href=HOME_PATH class="header__logo" aria-label="Место"></a>
            {move || match header_control(&location.pathname.get()) {
                HeaderControl::Account => {
                    let on_sign_out = on_sign_out.clone();
                    view! {
                        <div class="header__account">
                            <span class="header__email">{email}</span>
                            <button class="header__link header__link--button" on:click=on_sign_out>
                                "Выйти"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                HeaderControl::Link { href, label } => {
                    view! { <a href=href class="header__link">{label}</a> }.into_any()
                }
                HeaderControl::Empty => ().into_any(),
            }}
        </header>
    }
}
