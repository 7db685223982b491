use crate::domain::event::OperationalEvent;
use crate::domain::finding::{AnomalyType, Finding, Severity};
use crate::domain::ports::AnomalyDetector;
use serde_json::{Number, Value};
use std::collections::HashMap;
use tracing::info;

pub const FAILED_ACTION: &str = "Investigate failure reason and retry if safe.";
pub const DELAYED_ACTION: &str = "Review processing bottlenecks and escalate if queueing persists.";
pub const DUPLICATE_ACTION: &str =
    "Hold subsequent attempts and reconcile duplicates before settlement.";

/// Processing times strictly above this many seconds are flagged as delayed.
pub const DELAY_THRESHOLD_SECONDS: f64 = 30.0;

/// Key used to count transaction ids across a batch.
///
/// Text and numeric ids live in separate namespaces, so `"1"` and `1` never
/// collide. Numeric ids compare by value: `7` and `7.0` are the same id.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
enum TransactionKey<'a> {
    Text(&'a str),
    Number(String),
}

impl<'a> TransactionKey<'a> {
    /// Extracts the transaction id of an event, skipping absent or empty ones.
    fn of(event: &'a OperationalEvent) -> Option<Self> {
        match event.field("transaction_id")? {
            Value::String(s) if !s.is_empty() => Some(TransactionKey::Text(s)),
            Value::Number(n) => numeric_key(n).map(TransactionKey::Number),
            _ => None,
        }
    }
}

/// Canonical text for a numeric id, `None` for zero.
fn numeric_key(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 {
        None
    } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

/// Rule-based analyzer for payment events.
///
/// Flags failed, delayed and duplicated payments. It never calls out to a
/// payment processor or takes any action on what it finds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentMonitor;

impl PaymentMonitor {
    pub fn new() -> Self {
        Self
    }

    fn count_transactions(events: &[OperationalEvent]) -> HashMap<TransactionKey<'_>, usize> {
        let mut counts = HashMap::new();
        for key in events.iter().filter_map(TransactionKey::of) {
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Evaluates the rules for one event in priority order.
    ///
    /// A failed payment stops evaluation. The delay and duplicate rules are
    /// independent of each other and may both fire.
    fn inspect<'a>(
        event: &'a OperationalEvent,
        transaction_counts: &HashMap<TransactionKey<'a>, usize>,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();

        if event.field("payment_status").and_then(Value::as_str) == Some("failed") {
            findings.push(Finding::new(
                event.event_id.as_str(),
                AnomalyType::FailedPayment,
                Severity::High,
                FAILED_ACTION,
            ));
            return findings;
        }

        if let Some(seconds) = event
            .field("processing_time_seconds")
            .and_then(Value::as_f64)
            && seconds > DELAY_THRESHOLD_SECONDS
        {
            findings.push(Finding::new(
                event.event_id.as_str(),
                AnomalyType::DelayedPayment,
                Severity::Medium,
                DELAYED_ACTION,
            ));
        }

        if let Some(key) = TransactionKey::of(event)
            && transaction_counts.get(&key).copied().unwrap_or(0) > 1
        {
            findings.push(Finding::new(
                event.event_id.as_str(),
                AnomalyType::DuplicatePayment,
                Severity::High,
                DUPLICATE_ACTION,
            ));
        }

        findings
    }
}

impl AnomalyDetector for PaymentMonitor {
    fn detect(&self, events: &[OperationalEvent]) -> Vec<Finding> {
        // Duplicates need batch-wide counts before any event is judged
        let transaction_counts = Self::count_transactions(events);

        let mut findings = Vec::new();
        for event in events {
            for finding in Self::inspect(event, &transaction_counts) {
                info!(
                    event_id = %finding.event_id,
                    anomaly_type = %finding.anomaly_type,
                    severity = %finding.severity,
                    "Detected payment anomaly"
                );
                findings.push(finding);
            }
        }
        findings
    }
}
