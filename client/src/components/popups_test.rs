use super::*;
use crate::actions::test_support::{card, user};
use serde_json::json;

fn attr<'a>(attrs: &'a RemoteAttrs, name: &str) -> &'a str {
    attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str()).unwrap()
}

// =============================================================
// popup_intent
// =============================================================

#[test]
fn close_event_closes_from_any_popup() {
    let event = RemoteEvent::new(CLOSE_EVENT, serde_json::Value::Null);
    assert_eq!(popup_intent(&event, &Popup::EditAvatar), Some(PopupIntent::Close));
    assert_eq!(popup_intent(&event, &Popup::None), Some(PopupIntent::Close));
}

#[test]
fn update_user_event_carries_profile_fields() {
    let event = RemoteEvent::new(UPDATE_USER_EVENT, json!({"name": "n", "about": "a"}));
    assert_eq!(
        popup_intent(&event, &Popup::EditProfile),
        Some(PopupIntent::UpdateUser(UserUpdate { name: "n".to_owned(), about: "a".to_owned() }))
    );
}

#[test]
fn add_place_event_carries_new_card() {
    let event = RemoteEvent::new(ADD_PLACE_EVENT, json!({"name": "Архыз", "link": "https://example.test/a.jpg"}));
    let Some(PopupIntent::AddCard(new)) = popup_intent(&event, &Popup::AddPlace) else {
        panic!("expected add-card intent");
    };
    assert_eq!(new.name, "Архыз");
}

#[test]
fn malformed_payload_is_ignored() {
    let event = RemoteEvent::new(UPDATE_AVATAR_EVENT, json!({"url": "x"}));
    assert_eq!(popup_intent(&event, &Popup::EditAvatar), None);
}

#[test]
fn submit_removes_card_under_confirmation() {
    let event = RemoteEvent::new(SUBMIT_EVENT, serde_json::Value::Null);
    assert_eq!(
        popup_intent(&event, &Popup::ConfirmRemove(card("c1"))),
        Some(PopupIntent::RemoveCard(card("c1")))
    );
}

#[test]
fn submit_without_confirmation_is_ignored() {
    let event = RemoteEvent::new(SUBMIT_EVENT, serde_json::Value::Null);
    assert_eq!(popup_intent(&event, &Popup::AddPlace), None);
}

#[test]
fn unknown_event_is_ignored() {
    let event = RemoteEvent::new("resize", serde_json::Value::Null);
    assert_eq!(popup_intent(&event, &Popup::EditProfile), None);
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn profile_attrs_carry_current_user() {
    let mut me = user("me");
    me.about = "Исследователь".to_owned();
    let attrs = profile_attrs(true, &me);
    assert_eq!(attr(&attrs, "open"), "true");
    assert_eq!(attr(&attrs, "name"), "user me");
    assert_eq!(attr(&attrs, "about"), "Исследователь");
}

#[test]
fn image_attrs_follow_selected_card() {
    let attrs = image_attrs(&Popup::ImagePreview(card("c1")));
    assert_eq!(attr(&attrs, "open"), "true");
    assert_eq!(attr(&attrs, "card-link"), "https://example.test/c1.jpg");

    let attrs = image_attrs(&Popup::EditProfile);
    assert_eq!(attr(&attrs, "open"), "false");
    assert_eq!(attr(&attrs, "card-name"), "");
}

#[test]
fn confirm_attrs_describe_remove_form() {
    let attrs = confirm_attrs(false);
    assert_eq!(attr(&attrs, "open"), "false");
    assert_eq!(attr(&attrs, "name"), "remove-card");
    assert_eq!(attr(&attrs, "button-text"), "Да");
}
