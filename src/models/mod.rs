//! Core data models for Pocket Ledger
//!
//! The transaction type tag, the closed category sets, receipt line items,
//! and the records handed from the dialog to whoever consumes it.

pub mod amount;
pub mod category;
pub mod item;
pub mod transaction;
pub mod transaction_type;

pub use category::Category;
pub use item::ReceiptItem;
pub use transaction::{NewTransaction, RecordedTransaction, TransactionId};
pub use transaction_type::TransactionType;
