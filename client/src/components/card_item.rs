//! One card in the feed.
//!
//! The image opens the preview popup, the trash button (owner only) opens the
//! removal confirmation, and the heart toggles the current user's like.

#[cfg(test)]
#[path = "card_item_test.rs"]
mod card_item_test;

use leptos::prelude::*;

use crate::actions::{self, Services, Stores};
use crate::net::types::Card;
use crate::state::ui::Popup;

/// Per-viewer presentation of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardBadges {
    pub liked: bool,
    pub can_delete: bool,
    pub like_count: usize,
}

pub fn card_badges(card: &Card, viewer_id: &str) -> CardBadges {
    CardBadges {
        liked: card.is_liked_by(viewer_id),
        can_delete: card.is_owned_by(viewer_id),
        like_count: card.likes.len(),
    }
}

pub fn like_button_class(liked: bool) -> &'static str {
    if liked { "card__like card__like_active" } else { "card__like" }
}

#[component]
pub fn CardItem(card: Card, viewer_id: String) -> impl IntoView {
    let stores = expect_context::<Stores>();
    let services = expect_context::<Services>();

    let badges = card_badges(&card, &viewer_id);

    let preview = card.clone();
    let on_open = move |_| stores.ui.update(|ui| ui.open(Popup::ImagePreview(preview.clone())));
    let confirm = card.clone();
    let on_delete = move |_| stores.ui.update(|ui| ui.open(Popup::ConfirmRemove(confirm.clone())));
    let liked_card = card.clone();
    let on_like = move |_| {
        let services = services.clone();
        let card = liked_card.clone();
        crate::util::task::spawn(async move {
            actions::cards::toggle_like(&services.api, stores, &card).await;
        });
    };

    view! {
        <li class="card">
            <img class="card__image" src=card.link.clone() alt=card.name.clone() on:click=on_open/>
            {badges
                .can_delete
                .then(|| view! { <button class="card__delete" type="button" aria-label="Удалить" on:click=on_delete></button> })}
            <div class="card__caption">
                <h2 class="card__title">{card.name.clone()}</h2>
                <div class="card__likes">
                    <button class=like_button_class(badges.liked) type="button" aria-label="Нравится" on:click=on_like></button>
                    <span class="card__like-count">{badges.like_count}</span>
                </div>
            </div>
        </li>
    }
}
