//! Domain type definitions.

pub mod id;
pub mod time;
