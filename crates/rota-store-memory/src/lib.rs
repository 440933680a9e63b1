use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use rota_models::Roster;
use rota_store_interface::{Result, RosterStore, StoreError, VersionedRoster};

#[derive(Debug, Default)]
pub struct MemoryStore {
    rosters: RwLock<HashMap<String, VersionedRoster>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn rosters_get(&self, scope: &str) -> Result<Option<VersionedRoster>> {
        Ok(self.rosters.read().unwrap().get(scope).cloned())
    }

    #[tracing::instrument(skip(self, roster), fields(reviewers = roster.len()), ret)]
    async fn rosters_save(
        &self,
        scope: &str,
        expected_version: u64,
        roster: Roster,
    ) -> Result<u64> {
        let mut rosters = self.rosters.write().unwrap();
        let actual = rosters.get(scope).map(|r| r.version).unwrap_or(0);
        if actual != expected_version {
            return Err(StoreError::VersionConflict {
                scope: scope.into(),
                expected: expected_version,
                actual,
            });
        }

        let version = expected_version + 1;
        rosters.insert(scope.into(), VersionedRoster { version, roster });
        Ok(version)
    }

    async fn rosters_delete(&self, scope: &str) -> Result<bool> {
        Ok(self.rosters.write().unwrap().remove(scope).is_some())
    }

    async fn rosters_scopes(&self) -> Result<Vec<String>> {
        let mut scopes: Vec<_> = self.rosters.read().unwrap().keys().cloned().collect();
        scopes.sort();
        Ok(scopes)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
