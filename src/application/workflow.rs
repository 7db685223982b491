use crate::application::payment_monitor::PaymentMonitor;
use crate::application::router::EventRouter;
use crate::application::safety_gate::SafetyGate;
use crate::domain::decision::DecisionRecord;
use crate::domain::event::OperationalEvent;
use crate::domain::ports::{AnomalyDetectorBox, EventRoutingBox, SafetyReviewBox};
use tracing::debug;

/// Coordinates routing, payment anomaly detection and safety review.
///
/// `OpsWorkflow` holds no state between runs: the same input always produces the
/// same decisions. Stages run strictly in order because each one needs the
/// complete output of the previous one.
pub struct OpsWorkflow {
    router: EventRoutingBox,
    detector: AnomalyDetectorBox,
    reviewer: SafetyReviewBox,
}

impl Default for OpsWorkflow {
    fn default() -> Self {
        Self::new(Box::new(PaymentMonitor::new()), Box::new(SafetyGate::new()))
    }
}

impl OpsWorkflow {
    /// Creates a workflow from the given detector and reviewer, routing with
    /// the built-in `EventRouter`.
    ///
    /// # Arguments
    ///
    /// * `detector` - Analyzer run over the payment queue.
    /// * `reviewer` - Gate applied to the detector's findings.
    pub fn new(detector: AnomalyDetectorBox, reviewer: SafetyReviewBox) -> Self {
        Self {
            router: Box::new(EventRouter::new()),
            detector,
            reviewer,
        }
    }

    /// Replaces the router that partitions each batch.
    pub fn with_router(mut self, router: EventRoutingBox) -> Self {
        self.router = router;
        self
    }

    /// Runs the pipeline over one batch and returns the reviewed decisions.
    pub fn run(&self, events: Vec<OperationalEvent>) -> Vec<DecisionRecord> {
        let routed = self.router.route(events);

        debug!(
            billing = routed.billing_tasks.len(),
            support = routed.support_tasks.len(),
            "Billing and support queues have no downstream consumer"
        );

        if routed.payment_tasks.is_empty() {
            return Vec::new();
        }

        let findings = self.detector.detect(&routed.payment_tasks);
        if findings.is_empty() {
            return Vec::new();
        }

        self.reviewer.review(&findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::Decision;
    use crate::domain::event::{EventType, Payload};
    use crate::domain::finding::Finding;
    use crate::domain::ports::{AnomalyDetector, EventRouting, SafetyReview};
    use crate::domain::routing::RoutedBatch;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(id: &str, event_type: EventType, payload: Value) -> OperationalEvent {
        let payload: Payload = serde_json::from_value(payload).unwrap();
        OperationalEvent::new(id, event_type, payload, "2024-01-01T00:00:00Z")
    }

    /// Counts calls and forwards to the built-in stage.
    #[derive(Clone, Default)]
    struct Calls(Arc<AtomicUsize>);

    impl Calls {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    struct CountingDetector(Calls);

    impl AnomalyDetector for CountingDetector {
        fn detect(&self, events: &[OperationalEvent]) -> Vec<Finding> {
            self.0.0.fetch_add(1, Ordering::SeqCst);
            PaymentMonitor::new().detect(events)
        }
    }

    struct CountingReviewer(Calls);

    impl SafetyReview for CountingReviewer {
        fn review(&self, findings: &[Finding]) -> Vec<DecisionRecord> {
            self.0.0.fetch_add(1, Ordering::SeqCst);
            SafetyGate::new().review(findings)
        }
    }

    /// Sends every event to the billing queue.
    struct BillingOnlyRouter;

    impl EventRouting for BillingOnlyRouter {
        fn route(&self, events: Vec<OperationalEvent>) -> RoutedBatch {
            RoutedBatch {
                billing_tasks: events,
                ..RoutedBatch::default()
            }
        }
    }

    fn counting_workflow() -> (OpsWorkflow, Calls, Calls) {
        let detected = Calls::default();
        let reviewed = Calls::default();
        let workflow = OpsWorkflow::new(
            Box::new(CountingDetector(detected.clone())),
            Box::new(CountingReviewer(reviewed.clone())),
        );
        (workflow, detected, reviewed)
    }

    #[test]
    fn test_failed_payment_is_escalated() {
        let decisions = OpsWorkflow::default().run(vec![event(
            "evt-1",
            EventType::Payment,
            json!({"payment_status": "failed"}),
        )]);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].event_id, "evt-1");
        assert_eq!(decisions[0].decision, Decision::EscalateToHuman);
        assert!(decisions[0].reason.contains("High severity"));
    }

    #[test]
    fn test_duplicate_transactions_are_escalated() {
        let decisions = OpsWorkflow::default().run(vec![
            event("evt-1", EventType::Payment, json!({"transaction_id": "tx1"})),
            event("evt-2", EventType::Payment, json!({"transaction_id": "tx1"})),
        ]);

        assert_eq!(decisions.len(), 2);
        assert!(
            decisions
                .iter()
                .all(|d| d.decision == Decision::EscalateToHuman)
        );
    }

    #[test]
    fn test_delayed_payment_is_approved() {
        let decisions = OpsWorkflow::default().run(vec![event(
            "evt-1",
            EventType::Payment,
            json!({"processing_time_seconds": 45}),
        )]);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].decision, Decision::Approved);
    }

    #[test]
    fn test_no_payment_events_skips_detection() {
        let (workflow, detected, reviewed) = counting_workflow();

        let decisions = workflow.run(vec![
            event("b", EventType::Billing, json!({"payment_status": "failed"})),
            event("s", EventType::Support, json!({})),
        ]);

        assert!(decisions.is_empty());
        assert_eq!(detected.get(), 0);
        assert_eq!(reviewed.get(), 0);
    }

    #[test]
    fn test_no_findings_skips_review() {
        let (workflow, detected, reviewed) = counting_workflow();

        let decisions = workflow.run(vec![event(
            "p",
            EventType::Payment,
            json!({"payment_status": "succeeded"}),
        )]);

        assert!(decisions.is_empty());
        assert_eq!(detected.get(), 1);
        assert_eq!(reviewed.get(), 0);
    }

    #[test]
    fn test_injected_router_decides_what_is_analyzed() {
        let (workflow, detected, reviewed) = counting_workflow();
        let workflow = workflow.with_router(Box::new(BillingOnlyRouter));

        let decisions = workflow.run(vec![event(
            "p",
            EventType::Payment,
            json!({"payment_status": "failed"}),
        )]);

        assert!(decisions.is_empty());
        assert_eq!(detected.get(), 0);
        assert_eq!(reviewed.get(), 0);
    }

    #[test]
    fn test_empty_batch() {
        let (workflow, detected, _) = counting_workflow();
        assert!(workflow.run(Vec::new()).is_empty());
        assert_eq!(detected.get(), 0);
    }

    #[test]
    fn test_run_is_idempotent() {
        let workflow = OpsWorkflow::default();
        let events = vec![
            event(
                "1",
                EventType::Payment,
                json!({"transaction_id": "tx1", "processing_time_seconds": 31}),
            ),
            event("2", EventType::Billing, json!({})),
            event("3", EventType::Payment, json!({"transaction_id": "tx1"})),
            event("4", EventType::Payment, json!({"payment_status": "failed"})),
        ];

        let first = workflow.run(events.clone());
        let second = workflow.run(events);

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
