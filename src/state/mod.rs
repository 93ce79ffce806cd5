//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `login_form`) so individual components
//! can depend on small focused models, and so transitions stay plain
//! functions over plain data that native unit tests can drive directly.

pub mod auth;
pub mod login_form;
