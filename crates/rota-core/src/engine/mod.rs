//! Assignment engine.
//!
//! The engine owns no roster: each operation borrows the caller's [`Roster`]
//! for its duration and either applies fully or returns an error without
//! touching it.
//!
//! [`Roster`]: rota_models::Roster

mod ledger;
mod registry;
mod selector;
mod status_gate;

use rota_config::Config;

use crate::random::{RandomSource, SeededRandomSource, ThreadRandomSource};

pub struct AssignmentEngine {
    random: Box<dyn RandomSource>,
}

impl AssignmentEngine {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Uses a seeded source when `random_seed` is configured, the thread generator otherwise.
    pub fn from_config(config: &Config) -> Self {
        match config.random_seed {
            Some(seed) => {
                tracing::warn!(seed, "Using a fixed random seed for tie-breaks");
                Self::new(Box::new(SeededRandomSource::new(seed)))
            }
            None => Self::new(Box::new(ThreadRandomSource)),
        }
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandomSource))
    }
}
