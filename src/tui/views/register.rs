//! Transaction register view
//!
//! Shows the transactions recorded this session, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::transaction::{format_amount, truncate};
use crate::models::TransactionType;
use crate::tui::app::App;

/// Render the header with session totals
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.ledger.summary();
    let currency = &app.settings.entry_currency;

    let block = Block::default()
        .title(" Pocket Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled("Spent ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} {:.2}", currency, summary.expense_total),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  │  "),
        Span::styled("Earned ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} {:.2}", currency, summary.income_total),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  │  "),
        Span::styled("Net ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} {:.2}", currency, summary.net()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'e' for an expense or 'i' for income.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let date_width = app
        .ledger
        .transactions()
        .iter()
        .map(|recorded| app.settings.format_date(recorded.transaction.date).chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len()) as u16;

    let widths = [
        Constraint::Length(date_width + 2), // Date
        Constraint::Length(8),  // Type
        Constraint::Length(20), // Category
        Constraint::Length(12), // Amount
        Constraint::Length(10), // Estimate
        Constraint::Length(6),  // Items
        Constraint::Min(10),    // Note
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from(app.settings.display_currency.clone()).style(bold),
        Cell::from("Items").style(bold),
        Cell::from("Note").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rate = app.settings.exchange_rate;

    let rows: Vec<Row> = app
        .ledger
        .newest_first()
        .map(|recorded| {
            let txn = &recorded.transaction;
            let amount_style = match txn.kind {
                TransactionType::Expense => Style::default().fg(Color::Red),
                TransactionType::Income => Style::default().fg(Color::Green),
            };
            let items = if txn.items.is_empty() {
                "-".to_string()
            } else {
                txn.items.len().to_string()
            };

            Row::new(vec![
                Cell::from(app.settings.format_date(txn.date)),
                Cell::from(txn.kind.label()),
                Cell::from(truncate(txn.category.name(), 20)),
                Cell::from(format_amount(txn.signed_amount())).style(amount_style),
                Cell::from(format!("{:.0}", (txn.amount * rate).round())),
                Cell::from(items),
                Cell::from(truncate(&txn.note, 30)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(app.ledger.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
