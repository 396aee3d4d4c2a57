use std::collections::HashMap;

use super::{IncomeSource, LedgerSnapshot, Subscription, Transaction};
use crate::errors::Result;

/// Read-only view over the ledger store owned by the request layer. The
/// caller has already resolved `user_id`; implementations return copies so no
/// later mutation is visible to an in-flight computation.
pub trait LedgerStore: Send + Sync {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn list_income_sources(&self, user_id: &str) -> Result<Vec<IncomeSource>>;
    fn list_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>>;

    fn snapshot(&self, user_id: &str) -> Result<LedgerSnapshot> {
        Ok(LedgerSnapshot::new(
            self.list_transactions(user_id)?,
            self.list_income_sources(user_id)?,
            self.list_subscriptions(user_id)?,
        ))
    }
}

/// In-process store keyed by user id. Unknown users have an empty ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    ledgers: HashMap<String, LedgerSnapshot>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: impl Into<String>, snapshot: LedgerSnapshot) {
        self.ledgers.insert(user_id.into(), snapshot);
    }

    pub fn add_transaction(&mut self, user_id: &str, transaction: Transaction) {
        self.ledgers
            .entry(user_id.to_string())
            .or_default()
            .transactions
            .push(transaction);
    }

    /// Removes a transaction, returning whether it existed.
    pub fn delete_transaction(&mut self, user_id: &str, transaction_id: uuid::Uuid) -> bool {
        let Some(ledger) = self.ledgers.get_mut(user_id) else {
            return false;
        };
        let before = ledger.transactions.len();
        ledger.transactions.retain(|txn| txn.id != transaction_id);
        ledger.transactions.len() != before
    }

    fn ledger(&self, user_id: &str) -> Option<&LedgerSnapshot> {
        self.ledgers.get(user_id)
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .ledger(user_id)
            .map(|ledger| ledger.transactions.clone())
            .unwrap_or_default())
    }

    fn list_income_sources(&self, user_id: &str) -> Result<Vec<IncomeSource>> {
        Ok(self
            .ledger(user_id)
            .map(|ledger| ledger.income_sources.clone())
            .unwrap_or_default())
    }

    fn list_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>> {
        Ok(self
            .ledger(user_id)
            .map(|ledger| ledger.subscriptions.clone())
            .unwrap_or_default())
    }
}
