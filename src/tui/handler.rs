//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or the register.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::TransactionType;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_register_key(app, key)
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys on the register
fn handle_register_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('e') => app.open_transaction_dialog(TransactionType::Expense),
        KeyCode::Char('i') => app.open_transaction_dialog(TransactionType::Income),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.ledger.len().saturating_sub(1);
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Category;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_expense_through_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        type_str(&mut app, "23.40");
        press(&mut app, KeyCode::Tab); // Category
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab); // Note
        type_str(&mut app, "ramen");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.ledger.len(), 1);
        let txn = &app.ledger.transactions()[0].transaction;
        assert_eq!(txn.amount, 23.4);
        assert_eq!(txn.category, Category::Dining);
        assert_eq!(txn.note, "ramen");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(app.status_message.as_deref(), Some("Transaction added"));
    }

    #[test]
    fn test_empty_amount_keeps_dialog_open() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert!(app.ledger.is_empty());
        assert!(app.transaction_form.error_message.is_some());
    }

    #[test]
    fn test_ctrl_t_switches_to_income() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "99");
        ctrl(&mut app, 't');

        assert_eq!(app.transaction_form.active_tab, TransactionType::Income);
        assert!(app.transaction_form.draft.amount_input.is_empty());

        type_str(&mut app, "12.5");
        press(&mut app, KeyCode::Enter);

        let txn = &app.ledger.transactions()[0].transaction;
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.category, Category::SalaryFullTime);
        assert_eq!(txn.amount, 12.5);
    }

    #[test]
    fn test_escape_cancels_without_recording() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "500");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_alert_blocks_input_until_dismissed() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        ctrl(&mut app, 'u');
        type_str(&mut app, "notes.txt");
        press(&mut app, KeyCode::Enter);
        assert!(app.transaction_form.alert.is_some());
        assert!(!app.transaction_form.analyzing);

        // Swallowed while the alert is up
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.transaction_form.document_input.value(), "notes.txt");

        press(&mut app, KeyCode::Enter);
        assert!(app.transaction_form.alert.is_none());
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
    }

    #[test]
    fn test_help_dialog_toggles() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
