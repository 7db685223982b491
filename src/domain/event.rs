use crate::error::OpsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Open key-value payload attached to an event. Its schema depends on the
/// event type and is only inspected by the rules that care about it.
pub type Payload = Map<String, Value>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Payment,
    Billing,
    Support,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Payment, EventType::Billing, EventType::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Payment => "payment",
            EventType::Billing => "billing",
            EventType::Support => "support",
        }
    }

    /// The task queue this event type is dispatched to.
    pub fn queue(&self) -> QueueName {
        match self {
            EventType::Payment => QueueName::PaymentTasks,
            EventType::Billing => QueueName::BillingTasks,
            EventType::Support => QueueName::SupportTasks,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| OpsError::UnsupportedEventType(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QueueName {
    PaymentTasks,
    BillingTasks,
    SupportTasks,
}

impl QueueName {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueName::PaymentTasks => "payment_tasks",
            QueueName::BillingTasks => "billing_tasks",
            QueueName::SupportTasks => "support_tasks",
        }
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened in an operational domain.
///
/// Built once by the boundary adapter and never mutated afterwards. The
/// `timestamp` is carried through as-is; nothing in the pipeline parses it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OperationalEvent {
    pub event_id: String,
    pub event_type: EventType,
    pub payload: Payload,
    pub timestamp: String,
}

impl OperationalEvent {
    pub fn new(
        event_id: impl Into<String>,
        event_type: EventType,
        payload: Payload,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_type,
            payload,
            timestamp: timestamp.into(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
