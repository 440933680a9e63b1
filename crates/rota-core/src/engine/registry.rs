use rota_models::{Reviewer, Roster};
use tracing::info;

use super::AssignmentEngine;
use crate::{Result, RosterError};

pub(super) fn reviewer_mut<'r>(roster: &'r mut Roster, id: &str) -> Result<&'r mut Reviewer> {
    roster
        .get_mut(id)
        .ok_or_else(|| RosterError::NotRegistered(id.into()))
}

impl AssignmentEngine {
    /// Adds an available reviewer with no reviews and no debt.
    #[tracing::instrument(skip(self, roster))]
    pub fn register(&self, roster: &mut Roster, id: &str, display_name: &str) -> Result<()> {
        if roster.contains(id) {
            return Err(RosterError::AlreadyRegistered(id.into()));
        }

        roster.push(Reviewer::new(id, display_name));
        info!("Reviewer registered");
        Ok(())
    }

    pub fn get<'r>(&self, roster: &'r Roster, id: &str) -> Result<&'r Reviewer> {
        roster
            .get(id)
            .ok_or_else(|| RosterError::NotRegistered(id.into()))
    }

    pub fn get_all<'r>(&self, roster: &'r Roster) -> &'r [Reviewer] {
        roster.as_slice()
    }

    /// Re-keys a reviewer, keeping every other field.
    #[tracing::instrument(skip(self, roster))]
    pub fn update_id(&self, roster: &mut Roster, old_id: &str, new_id: &str) -> Result<()> {
        if !roster.contains(old_id) {
            return Err(RosterError::NotRegistered(old_id.into()));
        }
        if old_id == new_id {
            return Ok(());
        }
        if roster.contains(new_id) {
            return Err(RosterError::AlreadyRegistered(new_id.into()));
        }

        reviewer_mut(roster, old_id)?.id = new_id.into();
        info!("Reviewer id updated");
        Ok(())
    }

    #[tracing::instrument(skip(self, roster))]
    pub fn set_can_approve(&self, roster: &mut Roster, id: &str, can_approve: bool) -> Result<()> {
        reviewer_mut(roster, id)?.can_approve = can_approve;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rota_models::ReviewerStatus;

    use super::*;
    use crate::engine::tests::roster_with;

    #[test]
    fn register() {
        let engine = AssignmentEngine::default();
        let mut roster = Roster::new();

        engine.register(&mut roster, "U1", "Alice").unwrap();
        assert_eq!(
            engine.get(&roster, "U1").unwrap(),
            &Reviewer::new("U1", "Alice")
        );

        assert_eq!(
            engine.register(&mut roster, "U1", "Alice again"),
            Err(RosterError::AlreadyRegistered("U1".into()))
        );
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("U1").unwrap().display_name, "Alice");
    }

    #[test]
    fn get_unknown() {
        let engine = AssignmentEngine::default();
        assert_eq!(
            engine.get(&Roster::new(), "ghost"),
            Err(RosterError::NotRegistered("ghost".into()))
        );
    }

    #[test]
    fn get_all_keeps_order_and_filters_nothing() {
        let engine = AssignmentEngine::default();
        let roster = roster_with(&[
            ("c", ReviewerStatus::Suspended, 0),
            ("a", ReviewerStatus::Available, 1),
            ("b", ReviewerStatus::Busy, 0),
        ]);

        let ids: Vec<_> = engine
            .get_all(&roster)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn update_id() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[
            ("old", ReviewerStatus::Busy, 2),
            ("other", ReviewerStatus::Available, 0),
        ]);
        roster.get_mut("old").unwrap().review_count = 5;
        let before = roster.get("old").unwrap().clone();

        engine.update_id(&mut roster, "old", "new").unwrap();

        assert!(!roster.contains("old"));
        assert_eq!(
            roster.get("new").unwrap(),
            &Reviewer {
                id: "new".into(),
                ..before
            }
        );
    }

    #[test]
    fn update_id_errors() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[
            ("a", ReviewerStatus::Available, 0),
            ("b", ReviewerStatus::Available, 0),
        ]);
        let before = roster.clone();

        assert_eq!(
            engine.update_id(&mut roster, "ghost", "c"),
            Err(RosterError::NotRegistered("ghost".into()))
        );
        assert_eq!(
            engine.update_id(&mut roster, "a", "b"),
            Err(RosterError::AlreadyRegistered("b".into()))
        );
        assert_eq!(engine.update_id(&mut roster, "a", "a"), Ok(()));
        assert_eq!(roster, before);
    }

    #[test]
    fn set_can_approve() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", ReviewerStatus::Available, 0)]);

        engine.set_can_approve(&mut roster, "a", false).unwrap();
        assert!(!roster.get("a").unwrap().can_approve);
        engine.set_can_approve(&mut roster, "a", true).unwrap();
        assert!(roster.get("a").unwrap().can_approve);

        assert_eq!(
            engine.set_can_approve(&mut roster, "ghost", false),
            Err(RosterError::NotRegistered("ghost".into()))
        );
    }
}
