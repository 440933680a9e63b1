//! Review assignment engine.

#![warn(clippy::all)]

pub mod engine;
pub mod errors;
pub mod random;
mod service;

pub use engine::AssignmentEngine;
pub use errors::{Result, RosterError, ServiceError};
#[cfg(any(test, feature = "testkit"))]
pub use random::MockRandomSource;
pub use random::{RandomSource, SeededRandomSource, ThreadRandomSource};
pub use service::RosterService;
