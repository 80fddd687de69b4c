//! Review status shared by projects and proposals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of a submitted project or proposal.
///
/// Submissions start as `Pending`; a supervisor moves them to `Approved`
/// or `Rejected` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "review_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Awaiting supervisor review.
    Pending,
    /// Accepted by the supervisor.
    Approved,
    /// Declined by the supervisor.
    Rejected,
}

impl ReviewStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = fyphub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(fyphub_core::AppError::validation(
                "Invalid status specified",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "approved".parse::<ReviewStatus>().unwrap(),
            ReviewStatus::Approved
        );
        assert!("done".parse::<ReviewStatus>().is_err());
    }
}
