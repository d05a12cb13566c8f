use crate::interactive::constants::{
    APP_TITLE, HEADER_HEIGHT, HEADER_THEME_WIDTH, HEADER_TITLE_WIDTH, NARROW_TERMINAL_WIDTH,
    SEARCH_DIALOG_MAX_HEIGHT, SIDEBAR_WIDTH,
};
use crate::interactive::domain::models::Theme;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, content_view::ContentView, help_dialog::HelpDialog, result_popup::ResultPopup,
    search_bar::SearchBar, sidebar::Sidebar, styles::Styles,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    result_popup: ResultPopup,
    sidebar: Sidebar,
    content_view: ContentView,
    help_dialog: HelpDialog,
    styles: Styles,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the current state into the components so key handling and
    /// drawing both see the latest rows, results and content.
    pub fn sync(&mut self, state: &AppState) {
        self.styles = Styles::new(state.ui.theme);

        self.search_bar.set_styles(self.styles);
        self.search_bar.set_query(state.selection.query());
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.set_focused(state.mode == Mode::Search);

        self.result_popup.set_styles(self.styles);
        self.result_popup.set_results(state.selection.results());

        self.sidebar.set_styles(self.styles);
        self.sidebar.update(&state.selection);
        self.sidebar.set_focused(state.mode == Mode::Sidebar);

        self.content_view.set_styles(self.styles);
        self.content_view.set_content(&state.content);
        self.content_view.set_focused(state.mode == Mode::Content);

        self.help_dialog.set_styles(self.styles);
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);

        let area = f.area();
        f.render_widget(Block::default().style(self.styles.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Sidebar and content
            ])
            .split(area);

        let search_area = self.render_header(f, chunks[0], state.ui.theme);
        self.render_body(f, chunks[1], state.ui.sidebar_open);

        if state.selection.results_visible() {
            let height = self
                .result_popup
                .content_height()
                .min(SEARCH_DIALOG_MAX_HEIGHT)
                .min(chunks[1].height);
            let popup_area = Rect::new(search_area.x, chunks[1].y, search_area.width, height);
            self.result_popup.render(f, popup_area);
        }

        if state.mode == Mode::Help {
            self.help_dialog.render(f, area);
        }
    }

    /// Draws the title, search box and theme indicator; returns the search box area.
    fn render_header(&mut self, f: &mut Frame, area: Rect, theme: Theme) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(HEADER_TITLE_WIDTH),
                Constraint::Min(10),
                Constraint::Length(HEADER_THEME_WIDTH),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, self.styles.title())))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border(false)),
            );
        f.render_widget(title, chunks[0]);

        self.search_bar.render(f, chunks[1]);

        let label = match theme {
            Theme::Dark => "☾ Dark",
            Theme::Light => "☀ Light",
        };
        let indicator = Paragraph::new(Line::from(Span::styled(label, self.styles.normal())))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border(false)),
            );
        f.render_widget(indicator, chunks[2]);

        chunks[1]
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, sidebar_open: bool) {
        if area.width >= NARROW_TERMINAL_WIDTH {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(area);
            self.sidebar.render(f, chunks[0]);
            self.content_view.render(f, chunks[1]);
            return;
        }

        self.content_view.render(f, area);
        if sidebar_open {
            let overlay = Rect::new(area.x, area.y, SIDEBAR_WIDTH.min(area.width), area.height);
            f.render_widget(Clear, overlay);
            self.sidebar.render(f, overlay);
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_popup_mut(&mut self) -> &mut ResultPopup {
        &mut self.result_popup
    }

    pub fn get_sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn get_content_view_mut(&mut self) -> &mut ContentView {
        &mut self.content_view
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
