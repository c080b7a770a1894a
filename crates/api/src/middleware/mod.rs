//! Request extractors used by the route handlers.

pub mod json;
pub mod principal;

pub use json::ApiJson;
pub use principal::Principal;
