//! HTTP layer for the Windchill REST API.
//!
//! DESIGN
//! ======
//! One shared [`ApiClient`] owns the base URL and the 401 recovery policy;
//! wire types and the error taxonomy live in their own modules so state and
//! pages can depend on them without pulling in the transport.

pub mod api;
pub mod error;
pub mod types;

pub use api::ApiClient;
pub use error::ApiError;
