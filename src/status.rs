//! Review status vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// The documented review statuses of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Map a wire status code to a known status
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict text for this status
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Work reviewed: the reviewer liked everything. Hooray!",
            ReviewStatus::Reviewing => "Work has been taken up for review.",
            ReviewStatus::Rejected => "Work reviewed: the reviewer found mistakes.",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}
