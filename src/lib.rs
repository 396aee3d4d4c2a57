#![doc(test(attr(deny(warnings))))]

//! Finote core turns a user's ledger snapshot (one-off transactions, recurring
//! income and subscriptions) into dashboard aggregates and twelve-month
//! what-if balance projections.
//!
//! Every computation is a pure function of an immutable [`ledger::LedgerSnapshot`];
//! authentication, storage and transport belong to the caller.

pub mod api;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use errors::{FinanceError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finote core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
