use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

/// How often an income source pays out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
    OneTime,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
        Frequency::OneTime,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
            Frequency::OneTime => "one-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
            Frequency::OneTime => "One-time",
        }
    }

    pub fn is_recurring(self) -> bool {
        !matches!(self, Frequency::OneTime)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Frequency {
    type Err = FinanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            "one-time" | "one_time" | "onetime" => Ok(Frequency::OneTime),
            _ => Err(FinanceError::UnsupportedFrequency(value.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = FinanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Billing cadence of a subscription. One-time charges are not subscriptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn key(self) -> &'static str {
        Frequency::from(self).key()
    }
}

impl From<BillingCycle> for Frequency {
    fn from(cycle: BillingCycle) -> Self {
        match cycle {
            BillingCycle::Weekly => Frequency::Weekly,
            BillingCycle::Monthly => Frequency::Monthly,
            BillingCycle::Yearly => Frequency::Yearly,
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BillingCycle {
    type Err = FinanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.parse::<Frequency>()? {
            Frequency::Weekly => Ok(BillingCycle::Weekly),
            Frequency::Monthly => Ok(BillingCycle::Monthly),
            Frequency::Yearly => Ok(BillingCycle::Yearly),
            Frequency::OneTime => Err(FinanceError::UnsupportedFrequency(value.to_string())),
        }
    }
}

impl TryFrom<String> for BillingCycle {
    type Error = FinanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
