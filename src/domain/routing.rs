use super::event::{OperationalEvent, QueueName};

/// Events partitioned by task queue, each queue in input order.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct RoutedBatch {
    pub payment_tasks: Vec<OperationalEvent>,
    pub billing_tasks: Vec<OperationalEvent>,
    pub support_tasks: Vec<OperationalEvent>,
}

impl RoutedBatch {
    pub fn queue(&self, name: QueueName) -> &[OperationalEvent] {
        match name {
            QueueName::PaymentTasks => &self.payment_tasks,
            QueueName::BillingTasks => &self.billing_tasks,
            QueueName::SupportTasks => &self.support_tasks,
        }
    }

    pub fn queue_mut(&mut self, name: QueueName) -> &mut Vec<OperationalEvent> {
        match name {
            QueueName::PaymentTasks => &mut self.payment_tasks,
            QueueName::BillingTasks => &mut self.billing_tasks,
            QueueName::SupportTasks => &mut self.support_tasks,
        }
    }

    /// Total number of events across all queues.
    pub fn len(&self) -> usize {
        self.payment_tasks.len() + self.billing_tasks.len() + self.support_tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
