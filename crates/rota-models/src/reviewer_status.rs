use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewerStatusError {
    /// Unknown reviewer status.
    #[error("Unknown reviewer status: {}", status)]
    UnknownReviewerStatus { status: String },
}

/// Reviewer status.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerStatus {
    /// Can receive reviews.
    #[default]
    Available,
    /// Temporarily skipped by the selector.
    Busy,
    /// Away, debt frozen until resumed.
    Suspended,
}

impl ReviewerStatus {
    /// Convert reviewer status to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for ReviewerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ReviewerStatus {
    type Err = ReviewerStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for ReviewerStatus {
    type Error = ReviewerStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "suspended" => Ok(Self::Suspended),
            e => Err(ReviewerStatusError::UnknownReviewerStatus {
                status: e.to_string(),
            }),
        }
    }
}

impl From<ReviewerStatus> for &'static str {
    fn from(status: ReviewerStatus) -> Self {
        match status {
            ReviewerStatus::Available => "available",
            ReviewerStatus::Busy => "busy",
            ReviewerStatus::Suspended => "suspended",
        }
    }
}
