//! Store interfaces.

use async_trait::async_trait;
use rota_models::Roster;

use crate::Result;

/// Roster along with the version it was stored under.
///
/// Version `0` means the scope was never saved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionedRoster {
    /// Store version.
    pub version: u64,
    /// Roster content.
    pub roster: Roster,
}

/// Roster persistence, keyed by review scope.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Gets the roster of a scope, if it was ever saved.
    async fn rosters_get(&self, scope: &str) -> Result<Option<VersionedRoster>>;

    /// Gets the roster of a scope, or an empty roster at version 0.
    async fn rosters_get_or_default(&self, scope: &str) -> Result<VersionedRoster> {
        Ok(self.rosters_get(scope).await?.unwrap_or_default())
    }

    /// Saves the roster of a scope if its stored version still matches `expected_version`.
    ///
    /// Returns the new version.
    async fn rosters_save(
        &self,
        scope: &str,
        expected_version: u64,
        roster: Roster,
    ) -> Result<u64>;

    /// Deletes the roster of a scope.
    async fn rosters_delete(&self, scope: &str) -> Result<bool>;

    /// Lists known scopes, sorted.
    async fn rosters_scopes(&self) -> Result<Vec<String>>;

    /// Health check
    async fn health_check(&self) -> Result<()>;
}

