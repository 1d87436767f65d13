use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copyright">"© 2021 Mesto Russia"</p>
        </footer>
    }
}
