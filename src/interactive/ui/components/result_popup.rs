use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::search::SearchResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Drop-down list of search results shown under the search input.
#[derive(Default)]
pub struct ResultPopup {
    results: Vec<SearchResult>,
    state: ListState,
    styles: Styles,
}

impl ResultPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the results; the highlight goes back to the first row when they change.
    pub fn set_results(&mut self, results: &[SearchResult]) {
        if self.results.as_slice() != results {
            self.results = results.to_vec();
            self.state
                .select(if self.results.is_empty() { None } else { Some(0) });
        }
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    #[cfg(test)]
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Rows needed to show every result, borders included.
    pub fn content_height(&self) -> u16 {
        let lines: usize = self
            .results
            .iter()
            .map(|r| if r.parent_topic().is_some() { 2 } else { 1 })
            .sum();
        (lines as u16).saturating_add(2)
    }

    fn move_by(&mut self, delta: isize) -> Option<Message> {
        if self.results.is_empty() {
            return None;
        }
        let last = self.results.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
        None
    }

    fn result_item(&self, result: &SearchResult) -> ListItem<'static> {
        let mut lines = vec![Line::from(Span::styled(
            result.display_title(),
            self.styles.normal(),
        ))];
        if let Some(parent) = result.parent_topic() {
            lines.push(Line::from(Span::styled(
                format!("  {}", parent.title),
                self.styles.dimmed(),
            )));
        }
        ListItem::new(lines)
    }
}

impl Component for ResultPopup {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|result| self.result_item(result))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border(true))
                    .style(self.styles.base()),
            )
            .highlight_style(self.styles.selected());

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => self.move_by(-1),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.move_by(PAGE_SIZE as isize),
            KeyCode::Enter => self.state.selected().map(Message::ChooseSearchResult),
            _ => None,
        }
    }
}
