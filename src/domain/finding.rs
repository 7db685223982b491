use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    FailedPayment,
    DelayedPayment,
    DuplicatePayment,
}

impl AnomalyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::FailedPayment => "FAILED_PAYMENT",
            AnomalyType::DelayedPayment => "DELAYED_PAYMENT",
            AnomalyType::DuplicatePayment => "DUPLICATE_PAYMENT",
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged anomaly derived from a single event.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Finding {
    /// Identifier of the source event.
    pub event_id: String,
    pub anomaly_type: AnomalyType,
    pub severity: Severity,
    /// Human-readable remediation hint.
    pub suggested_action: String,
}

impl Finding {
    pub fn new(
        event_id: impl Into<String>,
        anomaly_type: AnomalyType,
        severity: Severity,
        suggested_action: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            anomaly_type,
            severity,
            suggested_action: suggested_action.into(),
        }
    }
}
