//! Page-level components, one per client route.

pub mod dashboard;
pub mod login;
