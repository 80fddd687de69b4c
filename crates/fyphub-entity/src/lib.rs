//! # fyphub-entity
//!
//! Domain entity models for FypHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod project;
pub mod proposal;
pub mod review;
pub mod user;
