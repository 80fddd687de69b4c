//! Project submission entities.

pub mod model;

pub use model::{CreateProject, Project, ProjectCounts, ProjectDetails};
