//! User domain entities: one model per role partition plus the
//! cross-partition identity union.

pub mod admin;
pub mod identity;
pub mod role;
pub mod student;
pub mod supervisor;

pub use admin::{Admin, AdminProfile};
pub use identity::{Identity, Profile};
pub use role::Role;
pub use student::{CreateStudent, Student, StudentProfile, UpdateStudent};
pub use supervisor::{CreateSupervisor, Supervisor, SupervisorProfile, UpdateSupervisor};
