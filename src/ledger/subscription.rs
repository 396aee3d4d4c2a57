use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BillingCycle, Frequency, Recurring};

/// A recurring charge. Cancelled subscriptions stay on record with `active = false`
/// and are ignored by every aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: DateTime<Utc>,
    #[serde(default = "Subscription::default_active")]
    pub active: bool,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        billing_cycle: BillingCycle,
        next_billing_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            billing_cycle,
            next_billing_date,
            active: true,
        }
    }

    pub fn default_active() -> bool {
        true
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

impl Recurring for Subscription {
    fn record_label(&self) -> String {
        format!("subscription {}", self.id)
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn frequency(&self) -> Frequency {
        self.billing_cycle.into()
    }
}
