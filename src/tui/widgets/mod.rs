//! Reusable widgets for the TUI

pub mod alert;
pub mod input;

pub use alert::{Alert, AlertKind, AlertWidget};
pub use input::{InputFilter, TextInput};
