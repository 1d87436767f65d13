//! Networking modules for the host's REST collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the auth/profile/cards service contracts and their HTTP
//! implementation; `types` defines the shared wire schema.

pub mod api;
pub mod types;
