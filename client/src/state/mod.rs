//! Application state held in signals by the root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the login/profile state, `cards` the feed, `ui` the popup slot.
//! Each is provided as an `RwSignal` context; views read, actions write.

pub mod cards;
pub mod session;
pub mod ui;
