//! Text input widget
//!
//! A single-line text field with a character-based cursor. Numeric fields
//! only accept digits and a decimal point.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// What characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Any,
    Decimal,
    Date,
}

impl InputFilter {
    fn accepts(self, c: char, current: &str) -> bool {
        match self {
            Self::Any => !c.is_control(),
            Self::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
            Self::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
    pub filter: InputFilter,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace the content in place
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor; returns false if the filter refused it
    pub fn insert(&mut self, c: char) -> bool {
        if !self.filter.accepts(c, &self.content) {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render as `label: value`, with a block cursor when focused
    pub fn line(&self, label_width: usize) -> Line<'static> {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = label_width),
            label_style,
        )];

        if !self.focused {
            let (text, style) = if self.content.is_empty() {
                (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
            } else {
                (self.content.clone(), Style::default().fg(Color::Yellow))
            };
            spans.push(Span::styled(text, style));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "café".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "café");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.value(), "caf");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "af");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = TextInput::new().content("早餐");
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "早x餐");
    }

    #[test]
    fn test_decimal_filter() {
        let mut input = TextInput::new().filter(InputFilter::Decimal);
        for c in "1a2.3.4-".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.34");
    }

    #[test]
    fn test_date_filter() {
        let mut input = TextInput::new().filter(InputFilter::Date);
        for c in "2025/01-0x2".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "202501-02");
    }

    #[test]
    fn test_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new().label("Note").placeholder("Optional");
        let line = input.line(6);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  Note: Optional");
    }
}
