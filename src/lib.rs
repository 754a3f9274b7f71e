//! Pocket Ledger - record expenses and income from the terminal
//!
//! The centre of the crate is the add-transaction dialog: a modal form over
//! a transient draft (amount, category, note, date, line items and, for
//! payslips, tax and superannuation) with a live estimate of the amount in a
//! second currency.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `models`: Transaction types, categories and records
//! - `upload`: Receipt/payslip type checks and the cancellable file read
//! - `services`: Consumers of submitted transactions
//! - `display`: Plain-text formatting
//! - `tui`: The terminal interface and the dialog itself
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::Settings;
//! use pocket_ledger::services::SessionLedger;
//! use pocket_ledger::tui::dialogs::transaction::TransactionFormState;
//!
//! let mut form = TransactionFormState::new(&Settings::default());
//! let mut ledger = SessionLedger::new();
//! form.open();
//! form.submit(&mut ledger);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod upload;

pub use error::{LedgerError, LedgerResult};
