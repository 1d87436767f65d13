//! Popup orchestration state.
//!
//! DESIGN
//! ======
//! A single enum slot holds whichever modal is open, so two popups can never
//! be open together. Opening a popup replaces the current one; `close_all`
//! returns to `Popup::None` from any state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::Card;

/// Outcome shown by the login/register notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Fail,
}

/// The modal currently open, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Popup {
    #[default]
    None,
    EditProfile,
    AddPlace,
    EditAvatar,
    /// Deletion confirmation for the carried card.
    ConfirmRemove(Card),
    /// Full-size view of the carried card.
    ImagePreview(Card),
    /// Login/register outcome notice.
    InfoTooltip(NoticeStatus),
}

/// Which popup kind a remote host slot represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    EditProfile,
    AddPlace,
    EditAvatar,
    ConfirmRemove,
    ImagePreview,
    InfoTooltip,
}

impl Popup {
    pub fn kind(&self) -> Option<PopupKind> {
        match self {
            Self::None => None,
            Self::EditProfile => Some(PopupKind::EditProfile),
            Self::AddPlace => Some(PopupKind::AddPlace),
            Self::EditAvatar => Some(PopupKind::EditAvatar),
            Self::ConfirmRemove(_) => Some(PopupKind::ConfirmRemove),
            Self::ImagePreview(_) => Some(PopupKind::ImagePreview),
            Self::InfoTooltip(_) => Some(PopupKind::InfoTooltip),
        }
    }

    /// Card carried by the preview or remove-confirmation popup.
    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::ConfirmRemove(card) | Self::ImagePreview(card) => Some(card),
            _ => None,
        }
    }
}

/// UI state owned by the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub popup: Popup,
}

impl UiState {
    /// Open `popup`, replacing whatever was open.
    pub fn open(&mut self, popup: Popup) {
        self.popup = popup;
    }

    pub fn notify(&mut self, status: NoticeStatus) {
        self.open(Popup::InfoTooltip(status));
    }

    pub fn close_all(&mut self) {
        self.popup = Popup::None;
    }

    pub fn is_open(&self, kind: PopupKind) -> bool {
        self.popup.kind() == Some(kind)
    }
}
