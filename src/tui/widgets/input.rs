//! Text input widget
//!
//! A single-line text field with a character-based cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Width reserved for field labels
pub const LABEL_WIDTH: usize = 12;

/// A simple text input widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
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
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Apply an editing key; returns false when the key is not an editing key
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!("{:>width$}: ", self.label, width = LABEL_WIDTH),
                label_style,
            ));
        }

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let before: String = self.content.chars().take(self.cursor).collect();
            let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
            let after: String = self.content.chars().skip(self.cursor + 1).collect();

            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        } else {
            spans.push(Span::styled(
                self.content.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "200".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "200");
        assert_eq!(input.cursor, 3);

        input.backspace();
        assert_eq!(input.value(), "20");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("₹50");
        assert_eq!(input.cursor, 3);

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "50");

        input.move_end();
        input.insert('é');
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "5é");
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Home)));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "ba");

        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert_eq!(input.value(), "ba");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("Snacks");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
