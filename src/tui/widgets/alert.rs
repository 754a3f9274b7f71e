//! Blocking alert widget
//!
//! A modal message box that must be dismissed before the dialog underneath
//! accepts input again.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Notice",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A message waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Error)
    }
}

/// Widget for rendering an alert
pub struct AlertWidget<'a> {
    alert: &'a Alert,
}

impl<'a> AlertWidget<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl<'a> Widget for AlertWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.alert.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.alert.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.alert.message.as_str(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_constructors() {
        let a = Alert::warning("Unsupported file");
        assert_eq!(a.kind, AlertKind::Warning);
        assert_eq!(a.message, "Unsupported file");
        assert_eq!(Alert::info("x").kind.color(), Color::Blue);
        assert_eq!(Alert::error("x").kind.title(), "Error");
    }

    #[test]
    fn test_render_contains_message() {
        let alert = Alert::info("Recognition disabled");
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        AlertWidget::new(&alert).render(area, &mut buf);

        let row: String = (0..40).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(row.contains("Recognition disabled"));
    }
}
