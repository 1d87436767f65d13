//! Home view: profile block and the card feed.

use leptos::prelude::*;

use crate::actions::Stores;
use crate::components::card_item::CardItem;
use crate::components::protected_route::ProtectedRoute;
use crate::state::ui::Popup;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Profile/>
            <CardFeed/>
        </ProtectedRoute>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let session = stores.session;
    let open = move |popup: Popup| stores.ui.update(|ui| ui.open(popup));

    view! {
        <section class="profile">
            <button class="profile__avatar-button" type="button" on:click=move |_| open(Popup::EditAvatar)>
                <img
                    class="profile__avatar"
                    src=move || session.with(|s| s.current_user.avatar.clone())
                    alt="Аватар"
                />
            </button>
            <div class="profile__info">
                <h1 class="profile__name">{move || session.with(|s| s.current_user.name.clone())}</h1>
                <button
                    class="profile__edit-button"
                    type="button"
                    aria-label="Редактировать"
                    on:click=move |_| open(Popup::EditProfile)
                ></button>
                <p class="profile__about">{move || session.with(|s| s.current_user.about.clone())}</p>
            </div>
            <button
                class="profile__add-button"
                type="button"
                aria-label="Добавить"
                on:click=move |_| open(Popup::AddPlace)
            ></button>
        </section>
    }
}

/// Card grid. Re-renders whenever the cache or the viewer changes.
#[component]
fn CardFeed() -> impl IntoView {
    let stores = expect_context::<Stores>();

    view! {
        <section class="elements">
            <ul class="elements__list">
                {move || {
                    let viewer_id = stores.session.with(|s| s.current_user.id.clone());
                    stores
                        .cards
                        .get()
                        .items
                        .into_iter()
                        .map(|card| view! { <CardItem card viewer_id=viewer_id.clone()/> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
