use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::debug;

use crate::core::normalizer;
use crate::errors::{FinanceError, Result};
use crate::ledger::{LedgerSnapshot, LedgerStore, Transaction};

pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub recent_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Point-in-time dashboard aggregates. Derived on demand, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub monthly_subscriptions: f64,
    pub category_breakdown: BTreeMap<String, f64>,
    pub recent_transactions: Vec<Transaction>,
    pub transaction_count: usize,
}

/// One category's slice of total expenses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Categories ordered by spend, largest first, with their share of total
    /// expenses. With no expenses every share is 0%.
    pub fn category_shares(&self, limit: Option<usize>) -> Vec<CategoryShare> {
        let mut shares: Vec<CategoryShare> = self
            .category_breakdown
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                amount: *amount,
                percentage: percentage_of(*amount, self.total_expenses),
            })
            .collect();
        shares.sort_by(|a, b| {
            b.amount
                .total_cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        if let Some(limit) = limit {
            shares.truncate(limit);
        }
        shares
    }
}

fn percentage_of(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// Aggregates a ledger snapshot into dashboard figures.
pub struct DashboardService;

impl DashboardService {
    pub fn compute(
        snapshot: &LedgerSnapshot,
        now: DateTime<Utc>,
        options: &DashboardOptions,
    ) -> Result<DashboardSnapshot> {
        Self::validate(snapshot)?;

        let (total_income, total_expenses) =
            snapshot
                .transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| {
                    if txn.is_income() {
                        (income + txn.amount, expenses)
                    } else {
                        (income, expenses + txn.amount)
                    }
                });
        let monthly_subscriptions = normalizer::monthly_total(snapshot.active_subscriptions())?;

        let dashboard = DashboardSnapshot {
            generated_at: now,
            balance: total_income - total_expenses,
            total_income,
            total_expenses,
            monthly_subscriptions,
            category_breakdown: Self::category_breakdown(&snapshot.transactions),
            recent_transactions: Self::recent_transactions(
                &snapshot.transactions,
                options.recent_limit,
            ),
            transaction_count: snapshot.transaction_count(),
        };
        debug!(
            transactions = dashboard.transaction_count,
            balance = dashboard.balance,
            generated_at = %now,
            "computed dashboard"
        );
        Ok(dashboard)
    }

    /// Pulls a snapshot for `user_id` from the store and aggregates it.
    pub fn compute_for_user(
        store: &dyn LedgerStore,
        user_id: &str,
        now: DateTime<Utc>,
        options: &DashboardOptions,
    ) -> Result<DashboardSnapshot> {
        let snapshot = store.snapshot(user_id)?;
        Self::compute(&snapshot, now, options)
    }

    /// Checks every record up front so aggregation is all-or-nothing.
    pub fn validate(snapshot: &LedgerSnapshot) -> Result<()> {
        for txn in &snapshot.transactions {
            txn.validate()?;
        }
        for income in &snapshot.income_sources {
            normalizer::record_monthly_equivalent(income)?;
        }
        for subscription in &snapshot.subscriptions {
            normalizer::record_monthly_equivalent(subscription)?;
        }
        Ok(())
    }

    /// Sums expenses per category. Names are trimmed and merged
    /// case-insensitively; the first spelling seen in ledger order is kept.
    pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut labels: HashMap<String, String> = HashMap::new();
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            let trimmed = txn.category.trim();
            let display = if trimmed.is_empty() {
                UNCATEGORIZED
            } else {
                trimmed
            };
            let label = labels
                .entry(display.to_lowercase())
                .or_insert_with(|| display.to_string())
                .clone();
            *totals.entry(label).or_insert(0.0) += txn.amount;
        }
        totals
    }

    /// Most recent transactions first. Same-date entries list the later-inserted
    /// record first. The input slice is left untouched.
    pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut indexed: Vec<(usize, &Transaction)> = transactions.iter().enumerate().collect();
        indexed.sort_by(|(idx_a, a), (idx_b, b)| b.date.cmp(&a.date).then(idx_b.cmp(idx_a)));
        indexed
            .into_iter()
            .take(limit)
            .map(|(_, txn)| txn.clone())
            .collect()
    }

    /// Number of distinct UTC calendar months that have at least one transaction.
    pub fn months_covered(transactions: &[Transaction]) -> Result<u32> {
        let months: BTreeSet<(i32, u32)> = transactions
            .iter()
            .map(|txn| (txn.date.year(), txn.date.month()))
            .collect();
        if months.is_empty() {
            return Err(FinanceError::EmptyDataset);
        }
        Ok(months.len() as u32)
    }
}
