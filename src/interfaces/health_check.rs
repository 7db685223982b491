use crate::application::workflow::OpsWorkflow;
use crate::domain::decision::DecisionReport;
use crate::error::Result;
use crate::interfaces::json::event_reader::parse_events;
use serde_json::Value;
use tracing::info;

/// Read-only entry point for running an ops health check over raw input.
///
/// Validates untyped records, delegates to the workflow and hands back a
/// report made of primitive data only. Holds no business logic of its own.
pub struct OpsHealthCheck {
    workflow: OpsWorkflow,
}

impl Default for OpsHealthCheck {
    fn default() -> Self {
        Self::new(OpsWorkflow::default())
    }
}

impl OpsHealthCheck {
    pub fn new(workflow: OpsWorkflow) -> Self {
        Self { workflow }
    }

    /// Validates the whole batch, then runs the workflow over it.
    ///
    /// Nothing runs if any record fails validation.
    pub fn run(&self, raw_events: &[Value]) -> Result<DecisionReport> {
        let events = parse_events(raw_events)?;
        info!(events = events.len(), "Running ops health check");

        let report = DecisionReport::from(self.workflow.run(events));
        info!(decisions = report.decisions.len(), "Ops health check complete");
        Ok(report)
    }
}
