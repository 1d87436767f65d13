//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::actions::{self, Services, Stores};
use crate::components::{footer::Footer, header::Header, info_tooltip::InfoTooltip, popups::Popups};
use crate::config::{CONFIG_META_NAME, HostConfig};
use crate::pages::{main_page::MainPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::remote::ModuleRegistry;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided to `App` directly and also serialized into a meta tag
/// so the hydrated client reads the same values.
pub fn shell(options: LeptosOptions, config: HostConfig) -> impl IntoView {
    let config_meta = config.to_meta_content();
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=config_meta/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the state signals, the remote-module registry and the live
/// collaborators, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<HostConfig>().unwrap_or_else(HostConfig::load);

    let stores = Stores::new();
    stores.provide();

    provide_context(ModuleRegistry::for_host(&config));
    provide_context(Services::new(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/mesto-host.css"/>
        <Title text="Mesto"/>

        <Router>
            <SessionBootstrap/>
            <div class="page">
                <Header/>
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=MainPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                </Routes>
                <Footer/>
                <Popups/>
                <InfoTooltip/>
            </div>
        </Router>
    }
}

/// Startup work: validate a persisted token and load the profile and cards.
///
/// Lives under the router so a successful validation can navigate home.
/// The `checking` flag is raised synchronously, before the first protected
/// render, so a returning user sees the loading placeholder instead of a
/// redirect to sign-in.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let services = expect_context::<Services>();
    let navigate = use_navigate();

    let token = actions::session::begin_bootstrap(&services.tokens, stores);

    crate::util::task::spawn(async move {
        let go = move |path: &str| navigate(path, leptos_router::NavigateOptions::default());
        let session = async {
            if let Some(token) = token {
                actions::session::validate_token(&services.api, &services.tokens, stores, token, go).await;
            }
        };
        let initial = actions::cards::load_initial(&services.api, &services.api, stores);
        futures::join!(session, initial);
    });
}
