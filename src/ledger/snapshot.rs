use serde::{Deserialize, Serialize};

use super::{IncomeSource, Subscription, Transaction};

/// Immutable point-in-time copy of one user's ledger, handed to the core for a
/// single computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl LedgerSnapshot {
    pub fn new(
        transactions: Vec<Transaction>,
        income_sources: Vec<IncomeSource>,
        subscriptions: Vec<Subscription>,
    ) -> Self {
        Self {
            transactions,
            income_sources,
            subscriptions,
        }
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Self::default()
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn active_subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter().filter(|sub| sub.active)
    }
}
