use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Frequency, Recurring};

/// A recurring (or one-time) inflow. `amount` is per occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeSource {
    pub id: Uuid,
    pub source: String,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<DateTime<Utc>>,
}

impl IncomeSource {
    pub fn new(source: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            amount,
            frequency,
            next_date: None,
        }
    }

    pub fn with_next_date(mut self, next_date: DateTime<Utc>) -> Self {
        self.next_date = Some(next_date);
        self
    }
}

impl Recurring for IncomeSource {
    fn record_label(&self) -> String {
        format!("income source {}", self.id)
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn frequency(&self) -> Frequency {
        self.frequency
    }
}
