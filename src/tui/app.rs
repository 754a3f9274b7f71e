//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::TransactionType;
use crate::services::SessionLedger;

use super::dialogs::transaction::TransactionFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Transactions recorded this session
    pub ledger: SessionLedger,

    /// Selected row in the register
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-transaction dialog state
    pub transaction_form: TransactionFormState,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            ledger: SessionLedger::new(),
            selected_index: 0,
            status_message: None,
            transaction_form: TransactionFormState::new(settings),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if self.active_dialog == ActiveDialog::AddTransaction && dialog != ActiveDialog::AddTransaction {
            self.transaction_form.close();
        }
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form.open();
        }
    }

    /// Open the add-transaction dialog on a given tab
    pub fn open_transaction_dialog(&mut self, kind: TransactionType) {
        self.active_dialog = ActiveDialog::AddTransaction;
        self.transaction_form.open_as(kind);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        if self.active_dialog == ActiveDialog::AddTransaction {
            self.transaction_form.close();
        }
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Periodic work: pick up finished document reads
    pub fn on_tick(&mut self) {
        if self.active_dialog == ActiveDialog::AddTransaction {
            self.transaction_form.poll_upload();
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.ledger.len() {
            self.selected_index += 1;
        }
    }

    /// Hand over the session's transactions
    pub fn into_ledger(self) -> SessionLedger {
        self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert!(!app.has_dialog());

        app.open_dialog(ActiveDialog::AddTransaction);
        assert!(app.has_dialog());

        app.close_dialog();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_open_transaction_dialog_on_tab() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.open_transaction_dialog(TransactionType::Income);
        assert_eq!(app.transaction_form.active_tab, TransactionType::Income);

        app.close_dialog();
        app.open_dialog(ActiveDialog::AddTransaction);
        assert_eq!(app.transaction_form.active_tab, TransactionType::Income);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.move_down();
        assert_eq!(app.selected_index, 0);
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }
}
