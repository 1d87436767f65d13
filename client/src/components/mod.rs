//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the host chrome and the mount points for remote modules.
//! They read shared state from context signals and hand user intents to
//! `crate::actions`.

pub mod card_item;
pub mod footer;
pub mod header;
pub mod info_tooltip;
pub mod popups;
pub mod protected_route;
pub mod remote_slot;
