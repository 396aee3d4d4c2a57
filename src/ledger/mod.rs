//! Ledger records, closed enumerations and the read-only store contract.

pub mod frequency;
pub mod income;
pub mod snapshot;
pub mod store;
pub mod subscription;
pub mod transaction;

pub use frequency::{BillingCycle, Frequency};
pub use income::IncomeSource;
pub use snapshot::LedgerSnapshot;
pub use store::{LedgerStore, MemoryLedgerStore};
pub use subscription::Subscription;
pub use transaction::{Transaction, TransactionKind};

/// A monetary record that repeats on a fixed cadence.
pub trait Recurring {
    /// Human-readable identifier used in validation errors.
    fn record_label(&self) -> String;
    fn amount(&self) -> f64;
    fn frequency(&self) -> Frequency;
}
