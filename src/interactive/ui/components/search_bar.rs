use crate::interactive::constants::SEARCH_PLACEHOLDER;
use crate::interactive::ui::components::{Component, is_exit_prompt, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    focused: bool,
    message: Option<String>,
    styles: Styles,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query, keeping the cursor where it was when the text is unchanged.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    #[cfg(test)]
    pub(crate) fn get_query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub(crate) fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum::<usize>()
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end`; returns whether the query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn input_line(&self) -> Line<'_> {
        if self.query.is_empty() && !self.focused {
            return Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.dimmed()));
        }
        if !self.focused {
            return Line::from(Span::styled(self.query.as_str(), self.styles.normal()));
        }

        let before: String = self.query.chars().take(self.cursor_position).collect();
        let under = self.query.chars().nth(self.cursor_position).unwrap_or(' ');
        let after: String = self.query.chars().skip(self.cursor_position + 1).collect();

        Line::from(vec![
            Span::styled(before, self.styles.normal()),
            Span::styled(under.to_string(), self.styles.cursor()),
            Span::styled(after, self.styles.normal()),
        ])
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut title = " Search ".to_string();
        if let Some(msg) = &self.message {
            title = format!(" Search - {msg} ");
        }
        let title_style = if is_exit_prompt(&self.message) {
            self.styles.heading().add_modifier(Modifier::REVERSED)
        } else {
            self.styles.title()
        };

        let input = Paragraph::new(self.input_line()).block(
            Block::default()
                .title(Span::styled(title, title_style))
                .borders(Borders::ALL)
                .border_style(self.styles.border(self.focused)),
        );

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    None
                }
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    if self.cursor_position < self.query.chars().count() {
                        self.cursor_position += 1;
                    }
                    None
                }
                // Ctrl+H - Delete character before cursor
                KeyCode::Char('h') => {
                    let pos = self.cursor_position;
                    if pos > 0 && self.delete_range(pos - 1, pos) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => {
                    let pos = self.cursor_position;
                    if self.delete_range(pos, pos + 1) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.delete_range(self.cursor_position, len) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                // Alt+B - Move cursor backward one word
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                // Alt+F - Move cursor forward one word
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                let pos = self.cursor_position;
                if pos > 0 && self.delete_range(pos - 1, pos) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                let pos = self.cursor_position;
                if self.delete_range(pos, pos + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
