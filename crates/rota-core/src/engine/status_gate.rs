//! Reviewer status transitions.
//!
//! `Available` and `Busy` toggle freely through [`AssignmentEngine::make_busy`] and
//! [`AssignmentEngine::make_available`]. `Suspended` is entered from either of
//! them and only left through [`AssignmentEngine::resume`].

use rota_models::{ReviewerStatus, Roster};
use tracing::info;

use super::{ledger::normalize_debt, registry::reviewer_mut, AssignmentEngine};
use crate::{Result, RosterError};

impl AssignmentEngine {
    #[tracing::instrument(skip(self, roster))]
    pub fn make_busy(&self, roster: &mut Roster, id: &str) -> Result<()> {
        let reviewer = reviewer_mut(roster, id)?;
        match reviewer.status {
            ReviewerStatus::Suspended => Err(RosterError::SuspendedCannotBeBusy(id.into())),
            ReviewerStatus::Busy => Err(RosterError::AlreadyBusy(id.into())),
            ReviewerStatus::Available => {
                reviewer.status = ReviewerStatus::Busy;
                info!("Reviewer is now busy");
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip(self, roster))]
    pub fn make_available(&self, roster: &mut Roster, id: &str) -> Result<()> {
        let reviewer = reviewer_mut(roster, id)?;
        match reviewer.status {
            ReviewerStatus::Suspended => {
                Err(RosterError::SuspendedCannotBeAvailable(id.into()))
            }
            ReviewerStatus::Available => Err(RosterError::AlreadyAvailable(id.into())),
            ReviewerStatus::Busy => {
                reviewer.status = ReviewerStatus::Available;
                info!("Reviewer is now available");
                Ok(())
            }
        }
    }

    /// Suspends a reviewer. Their debt stays frozen until [`AssignmentEngine::resume`].
    #[tracing::instrument(skip(self, roster))]
    pub fn suspend(&self, roster: &mut Roster, id: &str) -> Result<()> {
        let reviewer = reviewer_mut(roster, id)?;
        if reviewer.is_suspended() {
            return Err(RosterError::AlreadySuspended(id.into()));
        }

        reviewer.status = ReviewerStatus::Suspended;
        // Leaving the pool may lift the floor of the remaining reviewers.
        normalize_debt(roster, &[]);
        info!("Reviewer suspended");
        Ok(())
    }

    #[tracing::instrument(skip(self, roster))]
    pub fn resume(&self, roster: &mut Roster, id: &str) -> Result<()> {
        let reviewer = reviewer_mut(roster, id)?;
        if !reviewer.is_suspended() {
            return Err(RosterError::NotSuspendedCannotResume(id.into()));
        }

        reviewer.status = ReviewerStatus::Available;
        normalize_debt(roster, &[]);
        info!("Reviewer resumed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rota_models::ReviewerStatus::{Available, Busy, Suspended};

    use super::*;
    use crate::engine::tests::{debts, roster_with};

    fn status(roster: &Roster, id: &str) -> ReviewerStatus {
        roster.get(id).unwrap().status
    }

    #[test]
    fn busy_available_cycle() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", Available, 0)]);

        engine.make_busy(&mut roster, "a").unwrap();
        assert_eq!(status(&roster, "a"), Busy);
        assert_eq!(
            engine.make_busy(&mut roster, "a"),
            Err(RosterError::AlreadyBusy("a".into()))
        );

        engine.make_available(&mut roster, "a").unwrap();
        assert_eq!(status(&roster, "a"), Available);
        assert_eq!(
            engine.make_available(&mut roster, "a"),
            Err(RosterError::AlreadyAvailable("a".into()))
        );
    }

    #[test]
    fn suspended_only_leaves_through_resume() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", Suspended, 0)]);

        assert_eq!(
            engine.make_busy(&mut roster, "a"),
            Err(RosterError::SuspendedCannotBeBusy("a".into()))
        );
        assert_eq!(
            engine.make_available(&mut roster, "a"),
            Err(RosterError::SuspendedCannotBeAvailable("a".into()))
        );
        assert_eq!(status(&roster, "a"), Suspended);

        engine.resume(&mut roster, "a").unwrap();
        assert_eq!(status(&roster, "a"), Available);
    }

    #[test]
    fn suspend_from_any_active_state() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", Available, 0), ("b", Busy, 0)]);

        engine.suspend(&mut roster, "a").unwrap();
        engine.suspend(&mut roster, "b").unwrap();
        assert_eq!(status(&roster, "a"), Suspended);
        assert_eq!(status(&roster, "b"), Suspended);
    }

    #[test]
    fn suspend_twice() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("x", Suspended, 3), ("y", Available, 0)]);
        let before = roster.clone();

        assert_eq!(
            engine.suspend(&mut roster, "x"),
            Err(RosterError::AlreadySuspended("x".into()))
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn resume_active() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", Available, 0), ("b", Busy, 0)]);

        assert_eq!(
            engine.resume(&mut roster, "a"),
            Err(RosterError::NotSuspendedCannotResume("a".into()))
        );
        assert_eq!(
            engine.resume(&mut roster, "b"),
            Err(RosterError::NotSuspendedCannotResume("b".into()))
        );
    }

    #[test]
    fn unknown_reviewer() {
        let engine = AssignmentEngine::default();
        let mut roster = Roster::new();
        let ghost = || RosterError::NotRegistered("ghost".into());

        assert_eq!(engine.make_busy(&mut roster, "ghost"), Err(ghost()));
        assert_eq!(engine.make_available(&mut roster, "ghost"), Err(ghost()));
        assert_eq!(engine.suspend(&mut roster, "ghost"), Err(ghost()));
        assert_eq!(engine.resume(&mut roster, "ghost"), Err(ghost()));
    }

    #[test]
    fn suspending_the_floor_renormalizes_the_rest() {
        let engine = AssignmentEngine::default();
        let mut roster = roster_with(&[("a", Available, 0), ("b", Available, 2), ("c", Busy, 3)]);

        engine.suspend(&mut roster, "a").unwrap();

        assert_eq!(
            debts(&roster),
            vec![("a", 0), ("b", 0), ("c", 1)]
        );
    }
}
