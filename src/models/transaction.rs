//! Transaction records
//!
//! `NewTransaction` is what the dialog hands over on submit. Once a consumer
//! accepts it, it becomes a `RecordedTransaction` with an id and timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;
use super::item::ReceiptItem;
use super::transaction_type::TransactionType;

/// Unique identifier for a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", &self.0.to_string()[..8])
    }
}

/// A transaction assembled from a submitted draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Amount in the entry currency, always greater than zero
    pub amount: f64,
    pub category: Category,
    #[serde(default)]
    pub note: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superannuation: Option<f64>,
}

impl NewTransaction {
    /// Amount with its sign: negative for expenses
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Expense => -self.amount,
            TransactionType::Income => self.amount,
        }
    }

    /// Gross pay for an income entry that carries payslip deductions
    pub fn gross_amount(&self) -> f64 {
        self.amount + self.tax.unwrap_or(0.0) + self.superannuation.unwrap_or(0.0)
    }
}

/// A transaction accepted into the session ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedTransaction {
    pub id: TransactionId,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub transaction: NewTransaction,
}

impl RecordedTransaction {
    pub fn new(transaction: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            recorded_at: Utc::now(),
            transaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payslip() -> NewTransaction {
        NewTransaction {
            amount: 1500.0,
            category: Category::SalaryFullTime,
            note: "Fortnight pay".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            kind: TransactionType::Income,
            items: Vec::new(),
            tax: Some(320.0),
            superannuation: Some(180.0),
        }
    }

    #[test]
    fn test_signed_and_gross_amounts() {
        let mut txn = payslip();
        assert_eq!(txn.signed_amount(), 1500.0);
        assert_eq!(txn.gross_amount(), 2000.0);

        txn.kind = TransactionType::Expense;
        txn.tax = None;
        txn.superannuation = None;
        assert_eq!(txn.signed_amount(), -1500.0);
        assert_eq!(txn.gross_amount(), 1500.0);
    }

    #[test]
    fn test_serialized_shape() {
        let recorded = RecordedTransaction::new(payslip());
        let value = serde_json::to_value(&recorded).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["category"], "salary_full_time");
        assert_eq!(value["date"], "2025-03-14");
        assert_eq!(value["tax"], 320.0);
        assert!(value.get("id").is_some());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let mut txn = payslip();
        txn.tax = None;
        txn.superannuation = None;
        let value = serde_json::to_value(&txn).unwrap();
        assert!(value.get("tax").is_none());
        assert!(value.get("superannuation").is_none());
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        assert!(id.to_string().starts_with("txn-"));
        assert_eq!(id.to_string().len(), 12);
    }
}
