//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages map router paths to host views. `/` is gated on the session; the
//! sign-in and sign-up pages mount the auth remote's modules.

pub mod main_page;
pub mod sign_in;
pub mod sign_up;
