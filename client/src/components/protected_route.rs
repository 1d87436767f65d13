use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::actions::{SIGN_IN_PATH, Stores};
use crate::remote::LOADING_MESSAGE;
use crate::util::auth::{RouteGate, route_gate};

/// Render `children` only for a logged-in session.
///
/// While the startup token check runs, the loading placeholder is shown;
/// afterwards an anonymous session is redirected to sign-in.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let stores = expect_context::<Stores>();
    let gate = Memo::new(move |_| stores.session.with(route_gate));

    move || match gate.get() {
        RouteGate::Checking => view! { <div class="page__loading">{LOADING_MESSAGE}</div> }.into_any(),
        RouteGate::Allow => children().into_any(),
        RouteGate::RedirectToSignIn => view! { <Redirect path=SIGN_IN_PATH/> }.into_any(),
    }
}
