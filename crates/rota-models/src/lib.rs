//! Roster models.

#![warn(clippy::all)]

mod reviewer;
mod reviewer_status;
mod roster;

pub use reviewer::Reviewer;
pub use reviewer_status::{ReviewerStatus, ReviewerStatusError};
pub use roster::Roster;
