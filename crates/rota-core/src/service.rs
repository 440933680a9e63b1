use rota_config::Config;
use rota_models::{Reviewer, Roster};
use rota_store_interface::{RosterStore, StoreError, VersionedRoster};
use tracing::warn;

use crate::{AssignmentEngine, Result, RosterError, ServiceError};

/// Runs engine operations against the roster of a review scope.
///
/// The roster is loaded, mutated on a working copy, then saved back with
/// the version it was loaded at. Concurrent writers on the same scope are
/// detected by the store and the operation is replayed on fresh data.
pub struct RosterService<'a> {
    pub config: &'a Config,
    pub engine: &'a AssignmentEngine,
    pub store: &'a (dyn RosterStore + 'a),
}

impl<'a> RosterService<'a> {
    #[tracing::instrument(skip(self, op))]
    pub async fn apply<T, F>(&self, scope: &str, mut op: F) -> Result<T, ServiceError>
    where
        F: FnMut(&AssignmentEngine, &mut Roster) -> Result<T>,
    {
        let attempts = self.config.store.max_conflict_retries + 1;

        for attempt in 1..=attempts {
            let VersionedRoster {
                version,
                mut roster,
            } = self.store.rosters_get_or_default(scope).await?;
            let output = op(self.engine, &mut roster)?;

            match self.store.rosters_save(scope, version, roster).await {
                Ok(_) => return Ok(output),
                Err(StoreError::VersionConflict { actual, .. }) => {
                    warn!(
                        attempt,
                        loaded = version,
                        actual,
                        "Roster changed while it was being updated, retrying"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::ConflictRetriesExhausted {
            scope: scope.into(),
            attempts,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, scope: &str) -> Result<Vec<Reviewer>, ServiceError> {
        let stored = self.store.rosters_get_or_default(scope).await?;
        Ok(self.engine.get_all(&stored.roster).to_vec())
    }

    pub async fn register(
        &self,
        scope: &str,
        id: &str,
        display_name: &str,
    ) -> Result<(), ServiceError> {
        self.apply(scope, |engine, roster| {
            engine.register(roster, id, display_name)
        })
        .await
    }

    pub async fn assign_highest_debtor(
        &self,
        scope: &str,
        excluded: &[String],
    ) -> Result<Vec<Reviewer>, ServiceError> {
        self.apply(scope, |engine, roster| {
            engine.add_review_to_highest_debtor(roster, excluded)
        })
        .await
    }

    /// Assigns reviews to reviewers named by a command.
    ///
    /// `None` means the command carried no reviewer list at all.
    pub async fn add_review(
        &self,
        scope: &str,
        ids: Option<Vec<String>>,
    ) -> Result<(), ServiceError> {
        let ids = ids.ok_or(RosterError::NullArgument)?;
        self.apply(scope, |engine, roster| {
            engine.add_review(roster, ids.as_slice())
        })
        .await
    }

    /// Retracts reviews from reviewers named by a command.
    ///
    /// `None` means the command carried no reviewer list at all.
    pub async fn remove_review(
        &self,
        scope: &str,
        ids: Option<Vec<String>>,
    ) -> Result<(), ServiceError> {
        let ids = ids.ok_or(RosterError::NullArgument)?;
        self.apply(scope, |engine, roster| {
            engine.remove_review(roster, ids.as_slice())
        })
        .await
    }
}
