//! Review counts and debt bookkeeping.

use rota_models::{Reviewer, Roster};
use tracing::debug;

use super::AssignmentEngine;
use crate::{Result, RosterError};

/// Suspended reviewers keep their debt, unless this very operation touched them.
fn is_debt_eligible(reviewer: &Reviewer, touched: &[&str]) -> bool {
    !reviewer.is_suspended() || touched.contains(&reviewer.id.as_str())
}

/// Shifts eligible debts so that their minimum is zero.
pub(super) fn normalize_debt(roster: &mut Roster, touched: &[&str]) {
    let Some(min_debt) = roster
        .iter()
        .filter(|r| is_debt_eligible(r, touched))
        .map(|r| r.review_debt)
        .min()
    else {
        return;
    };

    if min_debt == 0 {
        return;
    }

    debug!(shift = -min_debt, "Normalizing review debt");
    for reviewer in roster.iter_mut().filter(|r| is_debt_eligible(r, touched)) {
        reviewer.review_debt -= min_debt;
    }
}

/// Records `delta` reviews for each touched reviewer. Debt moves the other way.
pub(super) fn record_reviews(roster: &mut Roster, touched: &[&str], delta: i64) {
    for reviewer in roster
        .iter_mut()
        .filter(|r| touched.contains(&r.id.as_str()))
    {
        reviewer.review_count += delta;
        reviewer.review_debt -= delta;
    }

    normalize_debt(roster, touched);
}

impl AssignmentEngine {
    /// Assigns one review to each listed reviewer, whatever their status.
    pub fn add_review<S: AsRef<str>>(&self, roster: &mut Roster, ids: &[S]) -> Result<()> {
        self.apply_reviews(roster, ids, 1)
    }

    /// Retracts one review from each listed reviewer, whatever their status.
    pub fn remove_review<S: AsRef<str>>(&self, roster: &mut Roster, ids: &[S]) -> Result<()> {
        self.apply_reviews(roster, ids, -1)
    }

    #[tracing::instrument(skip(self, roster, ids))]
    fn apply_reviews<S: AsRef<str>>(
        &self,
        roster: &mut Roster,
        ids: &[S],
        delta: i64,
    ) -> Result<()> {
        if ids.is_empty() {
            return Err(RosterError::EmptyArgument);
        }
        if roster.is_empty() {
            return Err(RosterError::NoReviewerAvailable);
        }

        let mut targets: Vec<&str> = Vec::with_capacity(ids.len());
        for id in ids.iter().map(AsRef::<str>::as_ref) {
            if !targets.contains(&id) {
                targets.push(id);
            }
        }

        // Resolve everything before mutating anything.
        if let Some(missing) = targets.iter().find(|id| !roster.contains(id)) {
            debug!(id = %missing, "Unknown reviewer, nothing recorded");
            return Err(RosterError::NotRegistered(missing.to_string()));
        }

        record_reviews(roster, &targets, delta);
        debug!(reviewers = ?targets, "Reviews recorded");
        Ok(())
    }
}
