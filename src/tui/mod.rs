//! Terminal User Interface module
//!
//! A register of the transactions recorded this session, and the modal
//! dialog used to add them.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

pub mod dialogs;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
