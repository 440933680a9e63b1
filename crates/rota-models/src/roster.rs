use serde::{Deserialize, Serialize};

use crate::Reviewer;

/// Reviewers of one review scope, in registration order.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct Roster {
    reviewers: Vec<Reviewer>,
}

impl Roster {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.reviewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Reviewer> {
        self.reviewers.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Reviewer> {
        self.reviewers.iter_mut().find(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reviewer> {
        self.reviewers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Reviewer> {
        self.reviewers.iter_mut()
    }

    pub fn as_slice(&self) -> &[Reviewer] {
        &self.reviewers
    }

    /// Appends a reviewer without any uniqueness check.
    ///
    /// Callers are expected to check [`Roster::contains`] first.
    pub fn push(&mut self, reviewer: Reviewer) {
        self.reviewers.push(reviewer);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Reviewer;
    type IntoIter = std::slice::Iter<'a, Reviewer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
