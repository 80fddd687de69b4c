//! JWT token issuance and verification.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{AccessClaims, RefreshClaims};
pub use issuer::{TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;
