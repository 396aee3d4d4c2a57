use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_positive_amount, FinanceError, Result};

/// A one-off ledger entry. Entries are never edited in place; a correction is a
/// delete followed by a new entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category: category.into(),
            description: None,
            date,
            created_at: None,
        }
    }

    pub fn income(amount: f64, category: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self::new(TransactionKind::Income, amount, category, date)
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self::new(TransactionKind::Expense, amount, category, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive_amount(format!("transaction {}", self.id), self.amount)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn key(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(FinanceError::validation(
                "transaction type",
                format!("expected `income` or `expense`, got `{value}`"),
            )),
        }
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = FinanceError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn serializes_kind_as_type_field() {
        let txn = Transaction::expense(12.5, "Food", date()).with_description("Lunch");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["description"], "Lunch");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn rejects_unknown_type_on_deserialize() {
        let raw = r#"{"id":"6f3c1f2e-8f4a-4a53-9c59-3d1f0f7a1b10","type":"transfer","amount":5.0,"category":"x","date":"2024-05-01T00:00:00Z"}"#;
        let err = serde_json::from_str::<Transaction>(raw).unwrap_err();
        assert!(err.to_string().contains("transfer"), "unexpected: {err}");
    }

    #[test]
    fn validate_flags_non_positive_amounts() {
        let txn = Transaction::income(0.0, "Salary", date());
        let err = txn.validate().unwrap_err();
        assert!(err.to_string().contains(&txn.id.to_string()));
        assert!(Transaction::income(1.0, "Salary", date()).validate().is_ok());
    }
}
