use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    EscalateToHuman,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "APPROVED",
            Decision::EscalateToHuman => "ESCALATE_TO_HUMAN",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The safety gate's verdict on one finding.
///
/// Records are classification only: nothing in this crate acts on them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DecisionRecord {
    pub event_id: String,
    pub decision: Decision,
    pub reason: String,
}

impl DecisionRecord {
    pub fn new(event_id: impl Into<String>, decision: Decision, reason: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            decision,
            reason: reason.into(),
        }
    }
}

/// Primitive-only result handed back across the boundary.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct DecisionReport {
    pub decisions: Vec<DecisionRecord>,
}

impl From<Vec<DecisionRecord>> for DecisionReport {
    fn from(decisions: Vec<DecisionRecord>) -> Self {
        Self { decisions }
    }
}
