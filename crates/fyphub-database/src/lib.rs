//! # fyphub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all FypHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
