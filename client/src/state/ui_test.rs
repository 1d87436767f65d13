use super::*;
use crate::net::types::User;

fn card(id: &str) -> Card {
    Card {
        id: id.to_owned(),
        name: "n".to_owned(),
        link: "l".to_owned(),
        owner: User::default(),
        likes: Vec::new(),
        created_at: None,
    }
}

const ALL_KINDS: [PopupKind; 6] = [
    PopupKind::EditProfile,
    PopupKind::AddPlace,
    PopupKind::EditAvatar,
    PopupKind::ConfirmRemove,
    PopupKind::ImagePreview,
    PopupKind::InfoTooltip,
];

fn open_count(state: &UiState) -> usize {
    ALL_KINDS.iter().filter(|kind| state.is_open(**kind)).count()
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_closed() {
    let state = UiState::default();
    assert_eq!(state.popup, Popup::None);
    assert_eq!(open_count(&state), 0);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn opening_replaces_previous_popup() {
    let mut state = UiState::default();
    state.open(Popup::EditProfile);
    state.open(Popup::AddPlace);
    assert!(state.is_open(PopupKind::AddPlace));
    assert!(!state.is_open(PopupKind::EditProfile));
}

#[test]
fn at_most_one_popup_open_for_any_intent_sequence() {
    let intents = [
        Popup::EditProfile,
        Popup::ImagePreview(card("a")),
        Popup::EditAvatar,
        Popup::ConfirmRemove(card("b")),
        Popup::AddPlace,
        Popup::InfoTooltip(NoticeStatus::Fail),
        Popup::EditProfile,
    ];
    let mut state = UiState::default();
    for intent in intents {
        state.open(intent);
        assert_eq!(open_count(&state), 1);
    }
}

#[test]
fn close_all_returns_to_none_from_every_popup() {
    let popups = [
        Popup::EditProfile,
        Popup::AddPlace,
        Popup::EditAvatar,
        Popup::ConfirmRemove(card("a")),
        Popup::ImagePreview(card("a")),
        Popup::InfoTooltip(NoticeStatus::Success),
    ];
    for popup in popups {
        let mut state = UiState::default();
        state.open(popup);
        state.close_all();
        assert_eq!(state.popup, Popup::None);
    }
}

#[test]
fn notify_opens_tooltip_with_status() {
    let mut state = UiState::default();
    state.notify(NoticeStatus::Fail);
    assert_eq!(state.popup, Popup::InfoTooltip(NoticeStatus::Fail));
}

#[test]
fn popup_card_only_for_card_popups() {
    assert_eq!(Popup::ImagePreview(card("a")).card().map(|c| c.id.as_str()), Some("a"));
    assert_eq!(Popup::ConfirmRemove(card("b")).card().map(|c| c.id.as_str()), Some("b"));
    assert!(Popup::EditAvatar.card().is_none());
    assert!(Popup::None.kind().is_none());
}
