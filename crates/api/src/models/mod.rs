//! Domain models and their client-facing wire shapes.
//!
//! Each entity comes as a pair: the full record (`Customer`, `Order`,
//! `Schedule`) that is stored and serialized back to the client, and a
//! draft (`CustomerDraft`, ...) holding the fields a client may submit.
//! Records serialize with camelCase keys to match the browser client.

pub mod customer;
pub mod order;
pub mod schedule;

pub use customer::{Customer, CustomerDraft};
pub use order::{Order, OrderDraft};
pub use schedule::{Schedule, ScheduleDraft};
