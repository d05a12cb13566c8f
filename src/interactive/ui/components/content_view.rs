use crate::catalog::SubtopicId;
use crate::content::{Block as DocBlock, ContentProvider, Document};
use crate::interactive::constants::{EMPTY_CONTENT_TEXT, LOADING_TEXT, PAGE_SIZE};
use crate::interactive::domain::models::ContentPane;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Clone, Debug, PartialEq)]
enum Shown {
    Empty,
    Loading(SubtopicId),
    Page(SubtopicId, Document),
}

/// Scrollable pane showing the selected subtopic's page.
pub struct ContentView {
    shown: Shown,
    scroll_offset: u16,
    focused: bool,
    styles: Styles,
}

impl Default for ContentView {
    fn default() -> Self {
        Self {
            shown: Shown::Empty,
            scroll_offset: 0,
            focused: false,
            styles: Styles::default(),
        }
    }
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the content pane. The document is rendered once per change and
    /// the scroll position resets whenever a different page comes in.
    pub fn set_content(&mut self, pane: &ContentPane) {
        let unchanged = match (&self.shown, pane) {
            (Shown::Empty, ContentPane::Empty) => true,
            (Shown::Loading(a), ContentPane::Loading(b)) => a == b,
            (Shown::Page(a, _), ContentPane::Ready(provider)) => a == provider.subtopic_id(),
            _ => false,
        };
        if unchanged {
            return;
        }

        self.shown = match pane {
            ContentPane::Empty => Shown::Empty,
            ContentPane::Loading(id) => Shown::Loading(id.clone()),
            ContentPane::Ready(provider) => {
                Shown::Page(provider.subtopic_id().clone(), provider.render())
            }
        };
        self.scroll_offset = 0;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    #[cfg(test)]
    pub(crate) fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    fn document_lines(&self, document: &Document) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            document.title.clone(),
            self.styles.title(),
        ))];

        for block in &document.blocks {
            match block {
                DocBlock::Heading(text) => {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(text.clone(), self.styles.heading())));
                }
                DocBlock::Paragraph(text) => {
                    lines.push(Line::from(self.inline_spans(text)));
                }
                DocBlock::Bullet(text) => {
                    let mut spans = vec![Span::styled("  • ", self.styles.dimmed())];
                    spans.extend(self.inline_spans(text));
                    lines.push(Line::from(spans));
                }
                DocBlock::Code { lang, text } => {
                    if let Some(lang) = lang {
                        lines.push(Line::from(Span::styled(
                            format!("  {lang}"),
                            self.styles.dimmed(),
                        )));
                    }
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("    {code_line}"),
                            self.styles.code(),
                        )));
                    }
                }
            }
        }

        lines
    }

    /// Splits `text` on backticks so `inline code` gets its own style.
    fn inline_spans(&self, text: &str) -> Vec<Span<'static>> {
        text.split('`')
            .enumerate()
            .filter(|(_, part)| !part.is_empty())
            .map(|(i, part)| {
                let style: Style = if i % 2 == 1 {
                    self.styles.inline_code()
                } else {
                    self.styles.normal()
                };
                Span::styled(part.to_string(), style)
            })
            .collect()
    }
}

impl Component for ContentView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.focused))
            .style(self.styles.base());

        let paragraph = match &self.shown {
            Shown::Empty => Paragraph::new(Line::from(Span::styled(
                EMPTY_CONTENT_TEXT,
                self.styles.dimmed(),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            Shown::Loading(_) => Paragraph::new(Line::from(Span::styled(
                LOADING_TEXT,
                self.styles.dimmed(),
            )))
            .alignment(Alignment::Center),
            Shown::Page(_, document) => {
                Paragraph::new(self.document_lines(document)).wrap(Wrap { trim: false })
            }
        };

        let inner = block.inner(area);
        let total = paragraph.line_count(inner.width) as u16;
        let max_scroll = total.saturating_sub(inner.height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        f.render_widget(
            paragraph.block(block).scroll((self.scroll_offset, 0)),
            area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE as u16),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(PAGE_SIZE as u16),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_offset = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll_offset = u16::MAX,
            KeyCode::Esc => return Some(Message::FocusSidebar),
            _ => {}
        }
        None
    }
}
