//! Roster store interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{Result, StoreError};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockRosterStore;
pub use interface::{RosterStore, VersionedRoster};
