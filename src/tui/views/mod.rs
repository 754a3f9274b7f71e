//! TUI Views module
//!
//! The session register, its header and the status bar.

pub mod register;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    register::render_header(frame, app, layout.header);
    register::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
