//! Converts per-occurrence amounts into average monthly cash flow.

use crate::errors::{ensure_positive_amount, Result};
use crate::ledger::{Frequency, Recurring};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly-equivalent of `amount` paid at `frequency`.
///
/// One-time amounts do not repeat and contribute nothing to the recurring load.
pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> Result<f64> {
    ensure_positive_amount("amount", amount)?;
    Ok(scale(amount, frequency))
}

/// Parses `frequency` before normalizing; unknown values fail with
/// `UnsupportedFrequency`.
pub fn monthly_equivalent_str(amount: f64, frequency: &str) -> Result<f64> {
    monthly_equivalent(amount, frequency.parse()?)
}

/// Like [`monthly_equivalent`] but names the offending record on failure.
pub fn record_monthly_equivalent<R: Recurring + ?Sized>(record: &R) -> Result<f64> {
    let amount = record.amount();
    ensure_positive_amount(record.record_label(), amount)?;
    Ok(scale(amount, record.frequency()))
}

/// Sums the monthly equivalents of `records`, failing on the first invalid one.
pub fn monthly_total<'a, R, I>(records: I) -> Result<f64>
where
    R: Recurring + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .try_fold(0.0, |total, record| Ok(total + record_monthly_equivalent(record)?))
}

fn scale(amount: f64, frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Monthly => amount,
        Frequency::Weekly => amount * WEEKS_PER_YEAR / MONTHS_PER_YEAR,
        Frequency::Yearly => amount / MONTHS_PER_YEAR,
        Frequency::OneTime => 0.0,
    }
}
