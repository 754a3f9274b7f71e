//! Display formatting for terminal output
//!
//! Plain-text rendering used outside the TUI, e.g. the session summary
//! printed when the TUI exits.

pub mod transaction;

pub use transaction::{format_register, format_summary};
