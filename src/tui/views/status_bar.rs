//! Status bar view
//!
//! Shows the exchange rate, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let settings = app.settings;
    let mut spans = vec![Span::styled(
        format!(
            " 1 {} = {} {} ",
            settings.entry_currency, settings.exchange_rate, settings.display_currency
        ),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        format!("{} recorded", app.ledger.len()),
        Style::default().fg(Color::White),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " e:Expense  i:Income  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
