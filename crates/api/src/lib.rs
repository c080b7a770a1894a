//! Clientele API - CRM backend for individual sales agents.
//!
//! A JSON REST service backing the browser CRM client. Each agent keeps
//! their own customers, orders, and schedules; nothing is shared between
//! agents, and the caller identity arrives as a `userId` query parameter
//! on every `/api` request.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON on port 8080
//! - `SQLite` for storage, one file per deployment
//! - Owner scoping in every query rather than an auth layer; the service
//!   trusts the identity the edge hands it
//!
//! The crate is a library so the integration tests can drive the router
//! in-process; `main.rs` is a thin binary around [`routes::router`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
