//! Project proposal entities.

pub mod model;

pub use model::{CreateProposal, Proposal, ProposalDetails};
