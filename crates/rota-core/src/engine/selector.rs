//! Highest-debtor selection.

use rota_models::{Reviewer, Roster};
use tracing::{debug, info};

use super::{ledger::record_reviews, AssignmentEngine};
use crate::{Result, RosterError};

impl AssignmentEngine {
    /// Assigns a review to the available reviewer who owes the most.
    ///
    /// Ties are broken through the engine's [`crate::RandomSource`]. When the
    /// chosen reviewer cannot approve, a second reviewer who can is assigned
    /// too, if one exists. The primary reviewer always comes first in the
    /// returned list.
    #[tracing::instrument(skip_all)]
    pub fn add_review_to_highest_debtor<S: AsRef<str>>(
        &self,
        roster: &mut Roster,
        excluded: &[S],
    ) -> Result<Vec<Reviewer>> {
        if roster.is_empty() {
            return Err(RosterError::NoReviewerAvailable);
        }

        let excluded: Vec<&str> = excluded.iter().map(AsRef::<str>::as_ref).collect();
        let chosen = self.choose_reviewers(roster, &excluded)?;
        let touched: Vec<&str> = chosen.iter().map(String::as_str).collect();
        record_reviews(roster, &touched, 1);
        info!(reviewers = ?touched, "Review assigned to highest debtor");

        Ok(chosen
            .iter()
            .filter_map(|id| roster.get(id).cloned())
            .collect())
    }

    fn choose_reviewers(&self, roster: &Roster, excluded: &[&str]) -> Result<Vec<String>> {
        let candidates: Vec<&Reviewer> = roster
            .iter()
            .filter(|r| r.is_available() && !excluded.contains(&r.id.as_str()))
            .collect();

        let primary = self
            .pick_highest_debtor(&candidates)
            .ok_or(RosterError::NoReviewerAvailable)?;
        let mut chosen = vec![primary.id.clone()];

        if !primary.can_approve {
            let approvers: Vec<&Reviewer> = candidates
                .iter()
                .copied()
                .filter(|r| r.can_approve && r.id != primary.id)
                .collect();

            match self.pick_highest_debtor(&approvers) {
                Some(approver) => chosen.push(approver.id.clone()),
                None => debug!(id = %primary.id, "No approving reviewer to pair with"),
            }
        }

        Ok(chosen)
    }

    fn pick_highest_debtor<'r>(&self, candidates: &[&'r Reviewer]) -> Option<&'r Reviewer> {
        let max_debt = candidates.iter().map(|r| r.review_debt).max()?;
        let tied: Vec<&Reviewer> = candidates
            .iter()
            .copied()
            .filter(|r| r.review_debt == max_debt)
            .collect();

        let index = match tied.len() {
            1 => 0,
            len => self.random.choose_index(len) % len,
        };
        tied.get(index).copied()
    }
}
