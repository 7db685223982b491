use super::decision::DecisionRecord;
use super::event::OperationalEvent;
use super::finding::Finding;
use super::routing::RoutedBatch;

/// Partitions a batch into task queues by event type.
pub trait EventRouting: Send + Sync {
    fn route(&self, events: Vec<OperationalEvent>) -> RoutedBatch;
}

/// Inspects a batch of payment events and flags anomalies.
pub trait AnomalyDetector: Send + Sync {
    fn detect(&self, events: &[OperationalEvent]) -> Vec<Finding>;
}

/// Classifies findings into decisions, one record per finding, same order.
pub trait SafetyReview: Send + Sync {
    fn review(&self, findings: &[Finding]) -> Vec<DecisionRecord>;
}

pub type EventRoutingBox = Box<dyn EventRouting>;
pub type AnomalyDetectorBox = Box<dyn AnomalyDetector>;
pub type SafetyReviewBox = Box<dyn SafetyReview>;
