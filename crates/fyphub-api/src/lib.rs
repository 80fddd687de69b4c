//! # fyphub-api
//!
//! HTTP API layer for FypHub built on Axum.
//!
//! Provides the role-scoped REST endpoints, the authorization gate
//! (extractor + role gates), cookie handling, middleware (CORS, request
//! logging), DTOs, and error mapping.

pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
