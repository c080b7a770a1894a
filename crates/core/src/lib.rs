//! Shared domain types for the Clientele CRM backend.
//!
//! This crate holds the vocabulary types that cross crate boundaries:
//! newtype entity IDs and the serde adapters for the wire formats the
//! browser client submits. It deliberately has no knowledge of HTTP or
//! of any particular storage backend; the optional `sqlite` feature adds
//! `sqlx` trait impls so the IDs can be bound and decoded directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::id::{CustomerId, OrderId, OwnerId, ScheduleId};
