use crate::domain::event::OperationalEvent;
use crate::domain::ports::EventRouting;
use crate::domain::routing::RoutedBatch;
use tracing::{info, warn};

/// Dispatches operational events to their domain task queues.
///
/// Routing looks at `event_type` only. The router never inspects payloads and
/// runs no domain logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventRouter;

impl EventRouter {
    pub fn new() -> Self {
        Self
    }
}

impl EventRouting for EventRouter {
    fn route(&self, events: Vec<OperationalEvent>) -> RoutedBatch {
        let mut batch = RoutedBatch::default();

        if events.is_empty() {
            warn!("No events to route; received empty input list.");
            return batch;
        }

        for event in events {
            let queue = event.event_type.queue();
            info!(
                event_id = %event.event_id,
                event_type = %event.event_type,
                queue = %queue,
                "Routed event"
            );
            batch.queue_mut(queue).push(event);
        }

        batch
    }
}
