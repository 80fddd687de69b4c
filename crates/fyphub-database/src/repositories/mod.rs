//! Concrete repository implementations, one per entity.

pub mod admin;
pub mod project;
pub mod proposal;
pub mod student;
pub mod supervisor;

pub use admin::AdminRepository;
pub use project::ProjectRepository;
pub use proposal::ProposalRepository;
pub use student::StudentRepository;
pub use supervisor::SupervisorRepository;
