//! HTTP surface for the curio catalog service.
//!
//! Two item routes (multipart create, list/search) plus health and static
//! upload serving. The catalog store is injected through
//! [`state::AppState`] so the integration tests run the full router over
//! the in-memory store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod upload;
