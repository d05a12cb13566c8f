use crate::catalog::{SubtopicId, TopicId};
use crate::interactive::constants::{PAGE_SIZE, SIDEBAR_FOOTER};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::selection::SelectionState;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarRow {
    Topic {
        id: TopicId,
        title: String,
        expanded: bool,
    },
    Subtopic {
        id: SubtopicId,
        title: String,
        parent: TopicId,
        selected: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum RowKey {
    Topic(TopicId),
    Subtopic(SubtopicId),
}

impl SidebarRow {
    fn key(&self) -> RowKey {
        match self {
            SidebarRow::Topic { id, .. } => RowKey::Topic(*id),
            SidebarRow::Subtopic { id, .. } => RowKey::Subtopic(id.clone()),
        }
    }

    fn parent_topic(&self) -> TopicId {
        match self {
            SidebarRow::Topic { id, .. } => *id,
            SidebarRow::Subtopic { parent, .. } => *parent,
        }
    }

    pub fn label(&self) -> String {
        match self {
            SidebarRow::Topic {
                id,
                title,
                expanded,
            } => {
                let marker = if *expanded { "▼" } else { "▶" };
                format!("{marker} {id}. {title}")
            }
            SidebarRow::Subtopic { id, title, .. } => format!("    {id} {title}"),
        }
    }
}

/// Topic tree with a keyboard cursor.
#[derive(Default)]
pub struct Sidebar {
    rows: Vec<SidebarRow>,
    state: ListState,
    focused: bool,
    styles: Styles,
    last_selected: Option<SubtopicId>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> &[SidebarRow] {
        &self.rows
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn cursor_row(&self) -> Option<&SidebarRow> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    /// Rebuilds the rows from the selection. The cursor stays on the same
    /// row when it still exists, falls back to its topic otherwise, and
    /// follows the selected subtopic when that changes.
    pub fn update(&mut self, selection: &SelectionState) {
        let previous = self.cursor_row().cloned();
        let expanded = selection.expanded_topic();
        let selected = selection.selected_subtopic().map(|s| s.id.clone());

        self.rows.clear();
        for topic in selection.catalog().all_topics() {
            let is_expanded = expanded == Some(topic.id);
            self.rows.push(SidebarRow::Topic {
                id: topic.id,
                title: topic.title.clone(),
                expanded: is_expanded,
            });
            if is_expanded {
                for subtopic in &topic.subtopics {
                    self.rows.push(SidebarRow::Subtopic {
                        id: subtopic.id.clone(),
                        title: subtopic.title.clone(),
                        parent: topic.id,
                        selected: selected.as_ref() == Some(&subtopic.id),
                    });
                }
            }
        }

        let selection_changed = selected != self.last_selected;
        self.last_selected = selected.clone();

        let followed = if selection_changed {
            selected
                .as_ref()
                .and_then(|id| self.position_of(&RowKey::Subtopic(id.clone())))
        } else {
            None
        };

        let cursor = followed
            .or_else(|| previous.as_ref().and_then(|row| self.position_of(&row.key())))
            .or_else(|| {
                previous
                    .as_ref()
                    .and_then(|row| self.position_of(&RowKey::Topic(row.parent_topic())))
            })
            .or_else(|| if self.rows.is_empty() { None } else { Some(0) });

        self.state.select(cursor);
    }

    fn position_of(&self, key: &RowKey) -> Option<usize> {
        self.rows.iter().position(|row| &row.key() == key)
    }

    fn move_to(&mut self, index: usize) {
        if !self.rows.is_empty() {
            self.state.select(Some(index.min(self.rows.len() - 1)));
        }
    }

    fn move_up(&mut self, amount: usize) {
        let current = self.state.selected().unwrap_or(0);
        self.move_to(current.saturating_sub(amount));
    }

    fn move_down(&mut self, amount: usize) {
        let current = self.state.selected().unwrap_or(0);
        self.move_to(current.saturating_add(amount));
    }

    fn activate(&self) -> Option<Message> {
        match self.cursor_row()? {
            SidebarRow::Topic { id, .. } => Some(Message::ToggleTopic(*id)),
            SidebarRow::Subtopic { id, .. } => Some(Message::SelectSubtopic(id.clone())),
        }
    }

    fn expand(&self) -> Option<Message> {
        match self.cursor_row()? {
            SidebarRow::Topic { expanded: true, .. } => None,
            _ => self.activate(),
        }
    }

    fn row_item(&self, row: &SidebarRow) -> ListItem<'static> {
        let style = match row {
            SidebarRow::Topic { expanded: true, .. } => self.styles.title(),
            SidebarRow::Topic { .. } => self.styles.normal(),
            SidebarRow::Subtopic { selected: true, .. } => self.styles.heading(),
            SidebarRow::Subtopic { .. } => self.styles.normal(),
        };
        ListItem::new(Line::from(Span::styled(row.label(), style)))
    }
}

impl Component for Sidebar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" Topics ", self.styles.title()))
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.focused))
            .style(self.styles.base());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = self.rows.iter().map(|row| self.row_item(row)).collect();
        let mut list = List::new(items);
        if self.focused {
            list = list.highlight_style(self.styles.selected());
        }
        f.render_stateful_widget(list, chunks[0], &mut self.state);

        let footer = Paragraph::new(Line::from(Span::styled(
            SIDEBAR_FOOTER,
            self.styles.dimmed(),
        )))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down(1);
                None
            }
            KeyCode::PageUp => {
                self.move_up(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.move_down(PAGE_SIZE);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.move_to(0);
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.move_to(usize::MAX);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Right | KeyCode::Char('l') => self.expand(),
            KeyCode::Left | KeyCode::Char('h') => Some(Message::CollapseTopic),
            _ => None,
        }
    }
}
