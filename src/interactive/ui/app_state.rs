use crate::catalog::{Catalog, SubtopicId};
use crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive::domain::models::{ContentPane, Theme};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::selection::SelectionState;
use std::sync::Arc;

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub selection: SelectionState,
    pub content: ContentPane,
    pub ui: UiState,
    mode_before_help: Mode,
}

pub struct UiState {
    pub message: Option<String>,
    pub theme: Theme,
    pub sidebar_open: bool,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            mode: Mode::Sidebar,
            selection: SelectionState::new(catalog),
            content: ContentPane::Empty,
            ui: UiState {
                message: None,
                theme: Theme::Dark,
                sidebar_open: false,
            },
            mode_before_help: Mode::Sidebar,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.ui.theme = theme;
        self
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.selection.on_query_change(q);
                if self.mode != Mode::Help {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::ChooseSearchResult(index) => {
                let Some(result) = self.selection.results().get(index).cloned() else {
                    return Command::None;
                };
                let previous = self.selected_id();
                self.selection.on_search_result_click(&result);
                self.mode = Mode::Sidebar;
                self.content_command(previous)
            }
            Message::ClearSearch => {
                self.selection.clear_search();
                self.mode = Mode::Sidebar;
                Command::None
            }
            Message::ToggleTopic(id) => {
                self.selection.toggle_topic(id);
                Command::None
            }
            Message::SelectSubtopic(id) => {
                let previous = self.selected_id();
                self.selection.select_subtopic(&id);
                self.content_command(previous)
            }
            Message::CollapseTopic => {
                if let Some(id) = self.selection.expanded_topic() {
                    self.selection.toggle_topic(id);
                }
                Command::None
            }
            Message::ContentPending(id) => {
                let already_shown = matches!(
                    &self.content,
                    ContentPane::Ready(provider) if provider.subtopic_id() == &id
                );
                if self.is_selected(&id) && !already_shown {
                    self.content = ContentPane::Loading(id);
                }
                Command::None
            }
            Message::ContentReady(id, provider) => {
                if self.is_selected(&id) {
                    self.content = ContentPane::Ready(provider);
                } else {
                    tracing::debug!(subtopic = %id, "Discarding content for a subtopic that is no longer selected");
                }
                Command::None
            }
            Message::FocusSearch => self.set_mode(Mode::Search),
            Message::FocusSidebar => self.set_mode(Mode::Sidebar),
            Message::FocusContent => self.set_mode(Mode::Content),
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.mode_before_help = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.mode_before_help;
                }
                Command::None
            }
            Message::ToggleTheme => {
                self.ui.theme = self.ui.theme.toggled();
                let label = match self.ui.theme {
                    Theme::Dark => "Dark theme",
                    Theme::Light => "Light theme",
                };
                self.ui.message = Some(label.to_string());
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ToggleSidebar => {
                self.ui.sidebar_open = !self.ui.sidebar_open;
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    fn set_mode(&mut self, mode: Mode) -> Command {
        self.mode = mode;
        Command::None
    }

    fn selected_id(&self) -> Option<SubtopicId> {
        self.selection.selected_subtopic().map(|s| s.id.clone())
    }

    fn is_selected(&self, id: &SubtopicId) -> bool {
        self.selection
            .selected_subtopic()
            .is_some_and(|selected| &selected.id == id)
    }

    /// Puts the pane into `Loading` as soon as the selection changes so the
    /// previous subtopic's page is never shown for the new one.
    fn content_command(&mut self, previous: Option<SubtopicId>) -> Command {
        let Some(selected) = self.selection.selected_subtopic() else {
            return Command::None;
        };
        if previous.as_ref() == Some(&selected.id) && !matches!(self.content, ContentPane::Empty) {
            return Command::None;
        }

        self.content = ContentPane::Loading(selected.id.clone());
        Command::ResolveContent(selected.clone())
    }
}
