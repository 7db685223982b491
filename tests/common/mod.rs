#![allow(dead_code)]

use ops_gate::domain::event::{EventType, OperationalEvent, Payload};
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};

/// Raw payment record as the boundary receives it.
pub fn payment(event_id: &str, payload: Value) -> Value {
    json!({
        "event_id": event_id,
        "event_type": "payment",
        "payload": payload,
        "timestamp": "2024-01-01T00:00:00Z",
    })
}

/// Builds a random batch of typed events.
///
/// Payment payloads draw from a small pool of transaction ids so duplicates
/// are common, and randomly mark payments as failed or slow.
pub fn random_batch(rng: &mut impl Rng, size: usize) -> Vec<OperationalEvent> {
    (0..size)
        .map(|i| {
            let event_type = *EventType::ALL.choose(rng).unwrap();
            let mut payload = Payload::new();
            if rng.gen_bool(0.7) {
                payload.insert(
                    "transaction_id".to_string(),
                    json!(format!("tx-{}", rng.gen_range(0..8))),
                );
            }
            if rng.gen_bool(0.2) {
                payload.insert("payment_status".to_string(), json!("failed"));
            }
            if rng.gen_bool(0.3) {
                payload.insert(
                    "processing_time_seconds".to_string(),
                    json!(rng.gen_range(0..60)),
                );
            }
            OperationalEvent::new(format!("evt-{i}"), event_type, payload, format!("t{i}"))
        })
        .collect()
}
