//! Add-transaction dialog
//!
//! Modal dialog for recording an expense or income. The form edits a
//! transient draft that is rebuilt whenever the dialog opens or the
//! expense/income tab changes. On a valid submit the assembled transaction is
//! handed to a `TransactionSink` and the host closes the dialog.
//!
//! A receipt or payslip can be attached by path. The file is read on a
//! background thread; recognition is not available, so a completed read only
//! raises a notice and the fields stay as typed.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::amount::{estimate_local, parse_optional_amount, parse_positive_amount};
use crate::models::{Category, NewTransaction, ReceiptItem, TransactionType};
use crate::services::TransactionSink;
use crate::tui::app::App;
use crate::tui::layout::{centered_rect, centered_rect_fixed};
use crate::tui::widgets::{Alert, AlertWidget, InputFilter, TextInput};
use crate::upload::{check_document, UploadResult, UploadTask};

/// Shown when a document of the wrong type is picked
pub const UNSUPPORTED_DOCUMENT_MESSAGE: &str =
    "Please upload an image (JPG/PNG) or a PDF document";

/// Shown when a document read completes
pub const RECOGNITION_DISABLED_MESSAGE: &str =
    "Receipt recognition is currently disabled. Please enter the details manually.";

/// Shown when the amount is missing, unparseable or not positive
pub const INVALID_AMOUNT_MESSAGE: &str = "Enter an amount greater than zero";

const DATE_FORMAT: &str = "%Y-%m-%d";
const LABEL_WIDTH: usize = 15;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    Type,
    #[default]
    Amount,
    Category,
    Note,
    Date,
    Tax,
    Superannuation,
    Items,
    Document,
}

const EXPENSE_FIELDS: &[TransactionField] = &[
    TransactionField::Type,
    TransactionField::Amount,
    TransactionField::Category,
    TransactionField::Note,
    TransactionField::Date,
    TransactionField::Items,
    TransactionField::Document,
];

const INCOME_FIELDS: &[TransactionField] = &[
    TransactionField::Type,
    TransactionField::Amount,
    TransactionField::Category,
    TransactionField::Note,
    TransactionField::Date,
    TransactionField::Tax,
    TransactionField::Superannuation,
    TransactionField::Items,
    TransactionField::Document,
];

impl TransactionField {
    /// Fields shown for a transaction type, in Tab order
    ///
    /// Tax and superannuation only apply to payslips.
    pub fn for_type(kind: TransactionType) -> &'static [TransactionField] {
        match kind {
            TransactionType::Expense => EXPENSE_FIELDS,
            TransactionType::Income => INCOME_FIELDS,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transaction went to the sink; the dialog should close
    Added,
    /// Nothing was sent; the message is shown inline
    Rejected(String),
}

/// The values being edited
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub amount_input: TextInput,
    pub category: Category,
    pub note_input: TextInput,
    pub date_input: TextInput,
    pub tax_input: TextInput,
    pub superannuation_input: TextInput,
    pub items: Vec<ReceiptItem>,
    pub item_input: TextInput,
}

impl TransactionDraft {
    /// A blank draft with the defaults for `kind`
    pub fn new(kind: TransactionType, today: NaiveDate, currency: &str) -> Self {
        let amount_label = match kind {
            TransactionType::Expense => format!("Amount ({})", currency),
            TransactionType::Income => format!("Net Pay ({})", currency),
        };
        Self {
            amount_input: TextInput::new()
                .label(amount_label)
                .placeholder("0.00")
                .filter(InputFilter::Decimal),
            category: Category::default_for(kind),
            note_input: TextInput::new().label("Note").placeholder("Optional note"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .filter(InputFilter::Date)
                .content(today.format(DATE_FORMAT).to_string()),
            tax_input: TextInput::new()
                .label("Tax")
                .placeholder("Optional")
                .filter(InputFilter::Decimal),
            superannuation_input: TextInput::new()
                .label("Super")
                .placeholder("Optional")
                .filter(InputFilter::Decimal),
            items: Vec::new(),
            item_input: TextInput::new()
                .label("Items")
                .placeholder("name price, Enter to add"),
        }
    }

    /// Parse the draft into a transaction
    ///
    /// The amount must parse and be greater than zero. Tax and superannuation
    /// are only read for income and only when filled in.
    pub fn build(&self, kind: TransactionType) -> LedgerResult<NewTransaction> {
        let amount = parse_positive_amount(self.amount_input.value())
            .ok_or_else(|| LedgerError::validation(INVALID_AMOUNT_MESSAGE))?;

        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), DATE_FORMAT)
            .map_err(|_| LedgerError::validation("Invalid date format. Use YYYY-MM-DD"))?;

        let (tax, superannuation) = match kind {
            TransactionType::Income => (
                parse_optional_amount(self.tax_input.value(), "tax")?,
                parse_optional_amount(self.superannuation_input.value(), "superannuation")?,
            ),
            TransactionType::Expense => (None, None),
        };

        Ok(NewTransaction {
            amount,
            category: self.category,
            note: self.note_input.value().trim().to_string(),
            date,
            kind,
            items: self.items.clone(),
            tax,
            superannuation,
        })
    }
}

/// State for the add-transaction dialog
#[derive(Debug)]
pub struct TransactionFormState {
    /// Expense or income tab; survives reopening the dialog
    pub active_tab: TransactionType,
    pub draft: TransactionDraft,
    pub focused_field: TransactionField,

    /// Path of the receipt or payslip to attach
    pub document_input: TextInput,
    /// A document read is in flight
    pub analyzing: bool,
    upload: Option<UploadTask>,

    /// Blocking message; input is ignored until it is dismissed
    pub alert: Option<Alert>,
    /// Inline validation message
    pub error_message: Option<String>,

    pub exchange_rate: f64,
    pub entry_currency: String,
    pub display_symbol: String,
}

impl TransactionFormState {
    pub fn new(settings: &Settings) -> Self {
        let kind = settings.default_type;
        Self {
            active_tab: kind,
            draft: TransactionDraft::new(kind, today(), &settings.entry_currency),
            focused_field: TransactionField::Amount,
            document_input: document_input(kind),
            analyzing: false,
            upload: None,
            alert: None,
            error_message: None,
            exchange_rate: settings.exchange_rate,
            entry_currency: settings.entry_currency.clone(),
            display_symbol: settings.display_symbol.clone(),
        }
    }

    /// Prepare for display: every field back to its default
    pub fn open(&mut self) {
        self.reset();
        self.set_focus(TransactionField::Amount);
        info!(tab = %self.active_tab, "transaction dialog opened");
    }

    /// Open on a specific tab
    pub fn open_as(&mut self, kind: TransactionType) {
        self.active_tab = kind;
        self.open();
    }

    /// Release anything tied to the discarded draft
    pub fn close(&mut self) {
        self.cancel_upload();
        self.alert = None;
        self.error_message = None;
        debug!("transaction dialog closed");
    }

    /// Rebuild the draft for the active tab
    ///
    /// A pending document read is cancelled so its completion cannot touch the
    /// new draft.
    pub fn reset(&mut self) {
        self.cancel_upload();
        self.draft = TransactionDraft::new(self.active_tab, today(), &self.entry_currency);
        self.document_input = document_input(self.active_tab);
        self.alert = None;
        self.error_message = None;

        if !self.visible_fields().contains(&self.focused_field) {
            self.focused_field = TransactionField::Amount;
        }
        self.update_focus();
    }

    /// Switch tabs; switching to a different tab resets the draft
    pub fn set_tab(&mut self, kind: TransactionType) {
        if self.active_tab == kind {
            return;
        }
        self.active_tab = kind;
        self.reset();
        info!(tab = %kind, "transaction dialog tab switched");
    }

    pub fn toggle_tab(&mut self) {
        self.set_tab(self.active_tab.toggle());
    }

    /// Estimated value of the typed amount in the display currency
    pub fn estimated_local_amount(&self) -> String {
        estimate_local(self.draft.amount_input.value(), self.exchange_rate)
    }

    /// Validate the draft and hand it to `sink`
    ///
    /// On rejection the sink is not called and the message is kept in
    /// `error_message`.
    pub fn submit<S: TransactionSink + ?Sized>(&mut self, sink: &mut S) -> SubmitOutcome {
        match self.draft.build(self.active_tab) {
            Ok(transaction) => {
                info!(
                    kind = %transaction.kind,
                    category = %transaction.category,
                    amount = transaction.amount,
                    items = transaction.items.len(),
                    "transaction submitted"
                );
                self.cancel_upload();
                self.error_message = None;
                sink.add(transaction);
                SubmitOutcome::Added
            }
            Err(e) => {
                let message = match e {
                    LedgerError::Validation(msg) => msg,
                    other => other.to_string(),
                };
                debug!(reason = %message, "transaction submit rejected");
                self.error_message = Some(message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    /// Begin attaching the document at `path`
    ///
    /// Anything other than an image or a PDF raises an alert and leaves the
    /// analyzing flag untouched. Ignored while another read is in flight.
    pub fn start_upload(&mut self, path: &str) {
        if self.analyzing {
            return;
        }
        let path = path.trim();
        if path.is_empty() {
            self.error_message = Some("Enter the path of a receipt or payslip".into());
            return;
        }

        let path = PathBuf::from(path);
        let mime = match check_document(&path) {
            Ok(mime) => mime,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "document rejected");
                self.alert = Some(Alert::warning(UNSUPPORTED_DOCUMENT_MESSAGE));
                return;
            }
        };

        info!(path = %path.display(), mime, "document upload started");
        self.error_message = None;
        self.analyzing = true;
        self.upload = Some(UploadTask::spawn(path, mime));
    }

    /// Apply a finished read, if any; returns true when one was applied
    pub fn poll_upload(&mut self) -> bool {
        let result = match &self.upload {
            Some(task) => task.try_finish(),
            None => None,
        };
        match result {
            Some(result) => {
                self.finish_upload(result);
                true
            }
            None => false,
        }
    }

    /// Block until the pending read finishes or `timeout` passes
    pub fn wait_for_upload(&mut self, timeout: Duration) -> bool {
        let result = match &self.upload {
            Some(task) => task.wait(timeout),
            None => None,
        };
        match result {
            Some(result) => {
                self.finish_upload(result);
                true
            }
            None => false,
        }
    }

    fn finish_upload(&mut self, result: UploadResult) {
        self.upload = None;
        self.analyzing = false;
        self.document_input.clear();

        match result {
            Ok(doc) => {
                info!(
                    mime = %doc.mime,
                    bytes = doc.byte_len,
                    encoded = doc.payload().len(),
                    "document read; recognition unavailable"
                );
                self.alert = Some(Alert::info(RECOGNITION_DISABLED_MESSAGE));
            }
            Err(e) => {
                warn!(error = %e, "document read failed");
                self.alert = Some(Alert::error(format!("Could not read the document: {}", e)));
            }
        }
    }

    fn cancel_upload(&mut self) {
        if let Some(task) = self.upload.take() {
            task.cancel();
            info!(
                path = %task.path().display(),
                mime = task.mime(),
                "document upload cancelled"
            );
        }
        self.analyzing = false;
    }

    pub fn has_pending_upload(&self) -> bool {
        self.upload.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Fields shown for the active tab
    pub fn visible_fields(&self) -> &'static [TransactionField] {
        TransactionField::for_type(self.active_tab)
    }

    pub fn next_field(&mut self) {
        let fields = self.visible_fields();
        let idx = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(idx + 1) % fields.len()];
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        let fields = self.visible_fields();
        let idx = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(idx + fields.len() - 1) % fields.len()];
        self.update_focus();
    }

    pub fn set_focus(&mut self, field: TransactionField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        let focused = self.focused_field;
        self.draft.amount_input.focused = focused == TransactionField::Amount;
        self.draft.note_input.focused = focused == TransactionField::Note;
        self.draft.date_input.focused = focused == TransactionField::Date;
        self.draft.tax_input.focused = focused == TransactionField::Tax;
        self.draft.superannuation_input.focused = focused == TransactionField::Superannuation;
        self.draft.item_input.focused = focused == TransactionField::Items;
        self.document_input.focused = focused == TransactionField::Document;
    }

    /// The text input under the focus, if the field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Type | TransactionField::Category => None,
            TransactionField::Amount => Some(&mut self.draft.amount_input),
            TransactionField::Note => Some(&mut self.draft.note_input),
            TransactionField::Date => Some(&mut self.draft.date_input),
            TransactionField::Tax => Some(&mut self.draft.tax_input),
            TransactionField::Superannuation => Some(&mut self.draft.superannuation_input),
            TransactionField::Items => Some(&mut self.draft.item_input),
            TransactionField::Document if self.analyzing => None,
            TransactionField::Document => Some(&mut self.document_input),
        }
    }

    pub fn next_category(&mut self) {
        self.draft.category = self.draft.category.next();
    }

    pub fn prev_category(&mut self) {
        self.draft.category = self.draft.category.prev();
    }

    /// Move the date by whole days; ignored while the date text is invalid
    pub fn shift_date(&mut self, days: i64) {
        let Ok(date) = NaiveDate::parse_from_str(self.draft.date_input.value(), DATE_FORMAT)
        else {
            return;
        };
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(shifted) = shifted {
            self.draft
                .date_input
                .set_value(shifted.format(DATE_FORMAT).to_string());
        }
    }

    /// Parse the item input and append it to the draft's items
    pub fn add_item_from_input(&mut self) {
        match ReceiptItem::parse(self.draft.item_input.value()) {
            Ok(item) => {
                self.draft.items.push(item);
                self.draft.item_input.clear();
                self.error_message = None;
            }
            Err(LedgerError::Validation(msg)) => self.error_message = Some(msg),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    pub fn remove_last_item(&mut self) {
        self.draft.items.pop();
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn document_input(kind: TransactionType) -> TextInput {
    let label = match kind {
        TransactionType::Expense => "Scan receipt",
        TransactionType::Income => "Upload payslip",
    };
    TextInput::new()
        .label(label)
        .placeholder("path to image or PDF, Enter to attach")
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.transaction_form;
    let area = centered_rect(70, 80, frame.area());

    frame.render_widget(Clear, area);

    let accent = match form.active_tab {
        TransactionType::Expense => Color::Cyan,
        TransactionType::Income => Color::Green,
    };
    let title = match form.active_tab {
        TransactionType::Expense => " Add Expense ",
        TransactionType::Income => " Add Income ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type tabs
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Estimate
            Constraint::Length(1), // Category
            Constraint::Length(1), // Note
            Constraint::Length(1), // Date
            Constraint::Length(1), // Tax
            Constraint::Length(1), // Super
            Constraint::Length(1), // Item input
            Constraint::Length(3), // Item list
            Constraint::Length(1), // Document
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(type_line(form, accent)), chunks[0]);
    frame.render_widget(Paragraph::new(form.draft.amount_input.line(LABEL_WIDTH)), chunks[2]);
    frame.render_widget(Paragraph::new(estimate_line(form)), chunks[3]);
    frame.render_widget(Paragraph::new(category_line(form)), chunks[4]);
    frame.render_widget(Paragraph::new(form.draft.note_input.line(LABEL_WIDTH)), chunks[5]);
    frame.render_widget(Paragraph::new(form.draft.date_input.line(LABEL_WIDTH)), chunks[6]);

    if form.active_tab.is_income() {
        frame.render_widget(Paragraph::new(form.draft.tax_input.line(LABEL_WIDTH)), chunks[7]);
        frame.render_widget(
            Paragraph::new(form.draft.superannuation_input.line(LABEL_WIDTH)),
            chunks[8],
        );
    }

    frame.render_widget(Paragraph::new(form.draft.item_input.line(LABEL_WIDTH)), chunks[9]);
    frame.render_widget(Paragraph::new(item_lines(form)), chunks[10]);
    frame.render_widget(Paragraph::new(document_line(form)), chunks[11]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[13]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Ctrl+T]", Style::default().fg(Color::Yellow)),
        Span::raw(" Expense/Income  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Yellow)),
        Span::raw(" Attach  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[14]);

    if let Some(ref alert) = form.alert {
        let alert_area = centered_rect_fixed(56, 7, frame.area());
        frame.render_widget(AlertWidget::new(alert), alert_area);
    }
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), style)
}

fn type_line(form: &TransactionFormState, accent: Color) -> Line<'static> {
    let focused = form.focused_field == TransactionField::Type;
    let mut spans = vec![label_span("Type", focused)];

    for kind in [TransactionType::Expense, TransactionType::Income] {
        let style = if kind == form.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn estimate_line(form: &TransactionFormState) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:>width$}  ", "", width = LABEL_WIDTH)),
        Span::styled(
            format!("≈ {}{}", form.display_symbol, form.estimated_local_amount()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  (rate {})", form.exchange_rate),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn category_line(form: &TransactionFormState) -> Line<'static> {
    let focused = form.focused_field == TransactionField::Category;
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let set = Category::for_type(form.active_tab);
    let mut spans = vec![label_span("Category", focused)];
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(form.draft.category.name().to_string(), value_style));
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!("  {}/{}", form.draft.category.index() + 1, set.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn item_lines(form: &TransactionFormState) -> Vec<Line<'static>> {
    let items = &form.draft.items;
    let indent = " ".repeat(LABEL_WIDTH + 2);
    let shown = items.len().min(2);
    let mut lines: Vec<Line> = items[items.len() - shown..]
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("{}• {}  {:.2}", indent, item.name, item.price),
                Style::default().fg(Color::White),
            ))
        })
        .collect();

    if items.len() > shown {
        lines.insert(
            0,
            Line::from(Span::styled(
                format!("{}… {} earlier", indent, items.len() - shown),
                Style::default().fg(Color::DarkGray),
            )),
        );
    }
    lines
}

fn document_line(form: &TransactionFormState) -> Line<'static> {
    if form.analyzing {
        return Line::from(vec![
            label_span(&form.document_input.label, false),
            Span::styled(
                "Analyzing...",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]);
    }
    form.document_input.line(LABEL_WIDTH)
}

/// Handle key input for the transaction dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    if form.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            form.dismiss_alert();
        }
        return true;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Char('t') if ctrl => {
            form.toggle_tab();
            return true;
        }

        KeyCode::Char('u') if ctrl => {
            form.set_focus(TransactionField::Document);
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            let focused = form.focused_field;
            match focused {
                TransactionField::Items if !form.draft.item_input.is_empty() => {
                    form.add_item_from_input();
                }
                TransactionField::Document => {
                    let path = form.document_input.value().to_string();
                    form.start_upload(&path);
                }
                _ => submit_transaction(app),
            }
            return true;
        }

        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            let forward = matches!(key.code, KeyCode::Right | KeyCode::Down);
            match form.focused_field {
                TransactionField::Type => form.toggle_tab(),
                TransactionField::Category if forward => form.next_category(),
                TransactionField::Category => form.prev_category(),
                TransactionField::Date if key.code == KeyCode::Up => form.shift_date(1),
                TransactionField::Date if key.code == KeyCode::Down => form.shift_date(-1),
                _ => {
                    if let Some(input) = form.focused_input() {
                        match key.code {
                            KeyCode::Left => input.move_left(),
                            KeyCode::Right => input.move_right(),
                            _ => return false,
                        }
                    }
                }
            }
            return true;
        }

        KeyCode::Backspace => {
            form.clear_error();
            if form.focused_field == TransactionField::Items && form.draft.item_input.is_empty() {
                form.remove_last_item();
            } else if let Some(input) = form.focused_input() {
                input.backspace();
            }
            return true;
        }

        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
            return true;
        }

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
            return true;
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
            return true;
        }

        KeyCode::Char(c) if !ctrl => {
            form.clear_error();
            match form.focused_field {
                TransactionField::Type => match c {
                    'e' | 'E' => form.set_tab(TransactionType::Expense),
                    'i' | 'I' => form.set_tab(TransactionType::Income),
                    ' ' => form.toggle_tab(),
                    _ => {}
                },
                TransactionField::Category => {
                    if c == ' ' {
                        form.next_category();
                    }
                }
                _ => {
                    if let Some(input) = form.focused_input() {
                        input.insert(c);
                    }
                }
            }
            return true;
        }

        _ => {}
    }

    false
}

/// Hand the draft to the session ledger and close on success
fn submit_transaction(app: &mut App) {
    if let SubmitOutcome::Added = app.transaction_form.submit(&mut app.ledger) {
        app.close_dialog();
        app.set_status("Transaction added");
    }
}
