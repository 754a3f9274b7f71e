//! Service layer for Pocket Ledger
//!
//! Consumers of transactions submitted from the dialog.

pub mod ledger;

pub use ledger::{LedgerSummary, SessionLedger, TransactionSink};
