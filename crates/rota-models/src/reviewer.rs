use serde::{Deserialize, Serialize};

use crate::ReviewerStatus;

fn default_can_approve() -> bool {
    true
}

/// Member of a review roster.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Reviewer {
    /// Stable identity key, unique within a roster.
    pub id: String,
    /// Presentation label, not unique.
    pub display_name: String,
    #[serde(default)]
    pub status: ReviewerStatus,
    /// Lifetime count of reviews performed. Can go negative.
    #[serde(default)]
    pub review_count: i64,
    /// Reviews owed to others, relative to the least-owing reviewer.
    #[serde(default)]
    pub review_debt: i64,
    /// When false, a second approving reviewer must be assigned alongside.
    #[serde(default = "default_can_approve")]
    pub can_approve: bool,
}

impl Reviewer {
    /// Creates a freshly registered reviewer.
    pub fn new<I: Into<String>, N: Into<String>>(id: I, display_name: N) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            status: ReviewerStatus::Available,
            review_count: 0,
            review_debt: 0,
            can_approve: default_can_approve(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == ReviewerStatus::Available
    }

    pub fn is_suspended(&self) -> bool {
        self.status == ReviewerStatus::Suspended
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new() {
        let reviewer = Reviewer::new("U1", "Alice");
        assert_eq!(
            reviewer,
            Reviewer {
                id: "U1".into(),
                display_name: "Alice".into(),
                status: ReviewerStatus::Available,
                review_count: 0,
                review_debt: 0,
                can_approve: true,
            }
        );
        assert!(reviewer.is_available());
        assert!(!reviewer.is_suspended());
    }

    #[test]
    fn deserialize_with_missing_fields() {
        let reviewer: Reviewer =
            serde_json::from_str(r#"{"id": "U2", "display_name": "Bob"}"#).unwrap();
        assert_eq!(reviewer, Reviewer::new("U2", "Bob"));
    }
}
