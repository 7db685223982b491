use crate::domain::decision::{Decision, DecisionRecord};
use crate::domain::finding::{Finding, Severity};
use crate::domain::ports::SafetyReview;
use tracing::info;

pub const HIGH_SEVERITY_REASON: &str = "High severity finding requires human review.";
pub const MONEY_MOVEMENT_REASON: &str = "Suggested action involves refund or payout.";
pub const ROUTINE_REASON: &str = "Routine finding approved by safety rules.";

const MONEY_MOVEMENT_KEYWORDS: [&str; 2] = ["refund", "payout"];

/// Compliance gate deciding which findings may be auto-approved.
///
/// The gate only classifies. It never executes or enforces the decisions it
/// records.
#[derive(Debug, Default, Clone, Copy)]
pub struct SafetyGate;

impl SafetyGate {
    pub fn new() -> Self {
        Self
    }

    /// First matching rule wins.
    fn decide(finding: &Finding) -> (Decision, &'static str) {
        if finding.severity == Severity::High {
            return (Decision::EscalateToHuman, HIGH_SEVERITY_REASON);
        }

        if mentions_money_movement(&finding.suggested_action) {
            return (Decision::EscalateToHuman, MONEY_MOVEMENT_REASON);
        }

        (Decision::Approved, ROUTINE_REASON)
    }
}

fn mentions_money_movement(suggested_action: &str) -> bool {
    let text = suggested_action.to_lowercase();
    MONEY_MOVEMENT_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}

impl SafetyReview for SafetyGate {
    fn review(&self, findings: &[Finding]) -> Vec<DecisionRecord> {
        findings
            .iter()
            .map(|finding| {
                let (decision, reason) = Self::decide(finding);
                let record = DecisionRecord::new(finding.event_id.as_str(), decision, reason);
                info!(
                    event_id = %record.event_id,
                    decision = %record.decision,
                    reason = %record.reason,
                    "Safety decision recorded"
                );
                record
            })
            .collect()
    }
}
