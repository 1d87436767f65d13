//! Remote popup hosts and their wiring to the popup-driven actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! All five remote popups stay mounted on every route; the `open` attribute
//! tells each one whether it is shown. Their submit intents run the profile
//! and card actions, which close every popup once the server confirms.
//! Explicit dismissal closes every popup immediately.

#[cfg(test)]
#[path = "popups_test.rs"]
mod popups_test;

use leptos::prelude::*;

use crate::actions::{self, Services, Stores};
use crate::components::remote_slot::{RemoteAttrs, RemoteEvent, RemoteSlot, flag};
use crate::net::types::{AvatarUpdate, Card, NewCard, User, UserUpdate};
use crate::remote::{ADD_PLACE_POPUP, CONFIRM_POPUP, EDIT_AVATAR_POPUP, EDIT_PROFILE_POPUP, IMAGE_POPUP};
use crate::state::ui::{Popup, PopupKind};

pub const CLOSE_EVENT: &str = "close";
pub const UPDATE_USER_EVENT: &str = "update-user";
pub const UPDATE_AVATAR_EVENT: &str = "update-avatar";
pub const ADD_PLACE_EVENT: &str = "add-place";
pub const SUBMIT_EVENT: &str = "submit";

const CONFIRM_TITLE: &str = "Вы уверены?";
const CONFIRM_NAME: &str = "remove-card";
const CONFIRM_BUTTON: &str = "Да";

/// What a popup asked the host to do.
#[derive(Clone, Debug, PartialEq)]
pub enum PopupIntent {
    UpdateUser(UserUpdate),
    UpdateAvatar(AvatarUpdate),
    AddCard(NewCard),
    RemoveCard(Card),
    Close,
}

/// Map a remote popup event to an intent.
///
/// `popup` is the currently open popup; a confirm submit with no card under
/// confirmation is ignored.
pub fn popup_intent(event: &RemoteEvent, popup: &Popup) -> Option<PopupIntent> {
    match event.name.as_str() {
        CLOSE_EVENT => Some(PopupIntent::Close),
        UPDATE_USER_EVENT => event.payload().map(PopupIntent::UpdateUser),
        UPDATE_AVATAR_EVENT => event.payload().map(PopupIntent::UpdateAvatar),
        ADD_PLACE_EVENT => event.payload().map(PopupIntent::AddCard),
        SUBMIT_EVENT => match popup {
            Popup::ConfirmRemove(card) => Some(PopupIntent::RemoveCard(card.clone())),
            _ => None,
        },
        _ => None,
    }
}

pub fn profile_attrs(open: bool, user: &User) -> RemoteAttrs {
    vec![("open", flag(open)), ("name", user.name.clone()), ("about", user.about.clone())]
}

pub fn avatar_attrs(open: bool, user: &User) -> RemoteAttrs {
    vec![("open", flag(open)), ("avatar", user.avatar.clone())]
}

pub fn add_place_attrs(open: bool) -> RemoteAttrs {
    vec![("open", flag(open))]
}

/// The preview popup is open exactly while a card is selected.
pub fn image_attrs(popup: &Popup) -> RemoteAttrs {
    let card = match popup {
        Popup::ImagePreview(card) => Some(card),
        _ => None,
    };
    vec![
        ("open", flag(card.is_some())),
        ("card-name", card.map(|c| c.name.clone()).unwrap_or_default()),
        ("card-link", card.map(|c| c.link.clone()).unwrap_or_default()),
    ]
}

pub fn confirm_attrs(open: bool) -> RemoteAttrs {
    vec![
        ("open", flag(open)),
        ("title", CONFIRM_TITLE.to_owned()),
        ("name", CONFIRM_NAME.to_owned()),
        ("button-text", CONFIRM_BUTTON.to_owned()),
    ]
}

fn dispatch(intent: PopupIntent, services: Services, stores: Stores) {
    match intent {
        PopupIntent::Close => stores.close_all_popups(),
        PopupIntent::UpdateUser(update) => crate::util::task::spawn(async move {
            actions::session::update_user(&services.api, stores, update).await;
        }),
        PopupIntent::UpdateAvatar(update) => crate::util::task::spawn(async move {
            actions::session::update_avatar(&services.api, stores, update).await;
        }),
        PopupIntent::AddCard(card) => crate::util::task::spawn(async move {
            actions::cards::add_card(&services.api, stores, card).await;
        }),
        PopupIntent::RemoveCard(card) => crate::util::task::spawn(async move {
            actions::cards::remove_card(&services.api, stores, &card).await;
        }),
    }
}

/// Every remote popup the host composes.
#[component]
pub fn Popups() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let services = expect_context::<Services>();
    let ui = stores.ui;
    let session = stores.session;

    let on_event = Callback::new(move |event: RemoteEvent| {
        let popup = ui.with_untracked(|ui| ui.popup.clone());
        if let Some(intent) = popup_intent(&event, &popup) {
            dispatch(intent, services.clone(), stores);
        }
    });
    let is_open = move |kind: PopupKind| ui.with(|ui| ui.is_open(kind));

    view! {
        <RemoteSlot
            spec=EDIT_PROFILE_POPUP
            attrs=Signal::derive(move || {
                session.with(|s| profile_attrs(is_open(PopupKind::EditProfile), &s.current_user))
            })
            events=&[UPDATE_USER_EVENT, CLOSE_EVENT]
            on_event
        />
        <RemoteSlot
            spec=ADD_PLACE_POPUP
            attrs=Signal::derive(move || add_place_attrs(is_open(PopupKind::AddPlace)))
            events=&[ADD_PLACE_EVENT, CLOSE_EVENT]
            on_event
        />
        <RemoteSlot
            spec=EDIT_AVATAR_POPUP
            attrs=Signal::derive(move || {
                session.with(|s| avatar_attrs(is_open(PopupKind::EditAvatar), &s.current_user))
            })
            events=&[UPDATE_AVATAR_EVENT, CLOSE_EVENT]
            on_event
        />
        <RemoteSlot
            spec=CONFIRM_POPUP
            attrs=Signal::derive(move || confirm_attrs(is_open(PopupKind::ConfirmRemove)))
            events=&[SUBMIT_EVENT, CLOSE_EVENT]
            on_event
        />
        <RemoteSlot
            spec=IMAGE_POPUP
            attrs=Signal::derive(move || ui.with(|ui| image_attrs(&ui.popup)))
            events=&[CLOSE_EVENT]
            on_event
        />
    }
}
