//! Session ledger
//!
//! The dialog hands each submitted transaction to a `TransactionSink`. The
//! TUI uses `SessionLedger`, which keeps the transactions recorded during this
//! run and can write them out as JSON when the session ends.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, RecordedTransaction, TransactionType};

/// Receives transactions submitted from the dialog
pub trait TransactionSink {
    fn add(&mut self, transaction: NewTransaction);
}

impl TransactionSink for Vec<NewTransaction> {
    fn add(&mut self, transaction: NewTransaction) {
        self.push(transaction);
    }
}

/// Totals across a set of recorded transactions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerSummary {
    pub expense_total: f64,
    pub income_total: f64,
    pub count: usize,
}

impl LedgerSummary {
    /// Income minus expenses
    pub fn net(&self) -> f64 {
        self.income_total - self.expense_total
    }
}

/// Transactions recorded during the current session, oldest first
#[derive(Debug, Default)]
pub struct SessionLedger {
    transactions: Vec<RecordedTransaction>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[RecordedTransaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Most recent first, for the register view
    pub fn newest_first(&self) -> impl Iterator<Item = &RecordedTransaction> {
        self.transactions.iter().rev()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.transactions
            .iter()
            .fold(LedgerSummary::default(), |mut acc, recorded| {
                let txn = &recorded.transaction;
                match txn.kind {
                    TransactionType::Expense => acc.expense_total += txn.amount,
                    TransactionType::Income => acc.income_total += txn.amount,
                }
                acc.count += 1;
                acc
            })
    }

    /// Write all recorded transactions as a pretty-printed JSON array
    pub fn write_json<W: Write>(&self, writer: W) -> LedgerResult<()> {
        serde_json::to_writer_pretty(writer, &self.transactions)?;
        Ok(())
    }

    /// Write the session to a file, replacing it if present
    pub fn save_json(&self, path: &Path) -> LedgerResult<()> {
        let file = File::create(path).map_err(|e| {
            LedgerError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), count = self.len(), "session exported");
        Ok(())
    }
}

impl TransactionSink for SessionLedger {
    fn add(&mut self, transaction: NewTransaction) {
        let recorded = RecordedTransaction::new(transaction);
        info!(
            id = %recorded.id,
            kind = %recorded.transaction.kind,
            category = %recorded.transaction.category,
            amount = recorded.transaction.amount,
            "transaction recorded"
        );
        self.transactions.push(recorded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn txn(kind: TransactionType, amount: f64) -> NewTransaction {
        NewTransaction {
            amount,
            category: Category::default_for(kind),
            note: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            kind,
            items: Vec::new(),
            tax: None,
            superannuation: None,
        }
    }

    #[test]
    fn test_add_records_in_order() {
        let mut ledger = SessionLedger::new();
        assert!(ledger.is_empty());

        ledger.add(txn(TransactionType::Expense, 12.0));
        ledger.add(txn(TransactionType::Income, 900.0));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].transaction.amount, 12.0);
        let newest: Vec<f64> = ledger.newest_first().map(|r| r.transaction.amount).collect();
        assert_eq!(newest, vec![900.0, 12.0]);
    }

    #[test]
    fn test_summary() {
        let mut ledger = SessionLedger::new();
        ledger.add(txn(TransactionType::Expense, 40.0));
        ledger.add(txn(TransactionType::Expense, 10.0));
        ledger.add(txn(TransactionType::Income, 200.0));

        let summary = ledger.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.expense_total, 50.0);
        assert_eq!(summary.income_total, 200.0);
        assert_eq!(summary.net(), 150.0);
    }

    #[test]
    fn test_save_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut ledger = SessionLedger::new();
        ledger.add(txn(TransactionType::Income, 12.5));
        ledger.save_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<RecordedTransaction> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].transaction.amount, 12.5);
        assert_eq!(parsed[0].transaction.kind, TransactionType::Income);
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<NewTransaction> = Vec::new();
        sink.add(txn(TransactionType::Expense, 3.0));
        assert_eq!(sink.len(), 1);
    }
}
