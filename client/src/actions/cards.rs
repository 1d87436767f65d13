//! Card feed flows: startup load, add, remove and like toggling.
//!
//! Every mutation waits for the server and applies the server's card; nothing
//! changes locally beforehand, so a failed request needs no rollback.
//! Failures are logged and swallowed.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use futures::future::try_join;
use leptos::prelude::*;

use super::Stores;
use crate::net::api::{CardsApi, ProfileApi};
use crate::net::types::{Card, NewCard};

/// Fetch cards and the current user concurrently; apply both or neither.
pub async fn load_initial<C, P>(cards: &C, profile: &P, stores: Stores)
where
    C: CardsApi,
    P: ProfileApi,
{
    match try_join(cards.get_card_list(), profile.get_user_info()).await {
        Ok((items, user)) => {
            stores.session.update(|s| s.current_user = user);
            stores.cards.update(|c| c.load(items));
        }
        Err(e) => leptos::logging::warn!("initial load failed: {e}"),
    }
}

pub async fn add_card<C: CardsApi>(cards: &C, stores: Stores, card: NewCard) {
    match cards.add_card(&card).await {
        Ok(created) => {
            stores.cards.update(|c| c.prepend(created));
            stores.close_all_popups();
        }
        Err(e) => leptos::logging::warn!("add card failed: {e}"),
    }
}

pub async fn remove_card<C: CardsApi>(cards: &C, stores: Stores, card: &Card) {
    match cards.remove_card(&card.id).await {
        Ok(()) => {
            stores.cards.update(|c| c.remove(&card.id));
            stores.close_all_popups();
        }
        Err(e) => leptos::logging::warn!("remove card {} failed: {e}", card.id),
    }
}

/// Flip the current user's like on `card` and store the server's version.
pub async fn toggle_like<C: CardsApi>(cards: &C, stores: Stores, card: &Card) {
    let liked = stores.session.with_untracked(|s| card.is_liked_by(s.current_user_id()));
    match cards.change_like_card_status(&card.id, !liked).await {
        Ok(updated) => stores.cards.update(|c| c.replace(updated)),
        Err(e) => leptos::logging::warn!("like toggle on {} failed: {e}", card.id),
    }
}
