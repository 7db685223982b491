//! Application layer containing the pipeline stages and their orchestration.
//!
//! Events flow one way: `router` partitions the batch, `payment_monitor` flags
//! anomalies in the payment queue and `safety_gate` decides which findings need a
//! human. `workflow` composes the three in that fixed order.

pub mod payment_monitor;
pub mod router;
pub mod safety_gate;
pub mod workflow;
