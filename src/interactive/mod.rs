use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::content::{ContentResolver, Resolution};

pub mod constants;
pub mod domain;
pub mod ui;


use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT, MESSAGE_CLEAR_DELAY_MS,
    NARROW_TERMINAL_WIDTH,
};
use self::domain::models::{Mode, Theme};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The terminal reader: owns the state, the components and the content resolver.
pub struct InteractiveApp {
    state: AppState,
    renderer: Renderer,
    resolver: ContentResolver,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    /// Width of the last drawn frame
    terminal_width: u16,
}

impl InteractiveApp {
    pub fn new(catalog: Arc<Catalog>, resolver: ContentResolver, theme: Theme) -> Self {
        let state = AppState::new(catalog).with_theme(theme);
        let mut renderer = Renderer::new();
        renderer.sync(&state);

        Self {
            state,
            renderer,
            resolver,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            terminal_width: u16::MAX,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        tracing::info!(
            topics = self.state.selection.catalog().topic_count(),
            theme = ?self.state.ui.theme,
            "Interactive session started"
        );

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        tracing::info!(
            guides_requested = self.resolver.loads_started(),
            "Interactive session ended"
        );
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            self.poll_content();

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn draw(&mut self, f: &mut Frame) {
        self.terminal_width = f.area().width;
        self.renderer.render(f, &self.state);
    }

    /// True when the last frame was too narrow for the sidebar and the overlay is closed.
    fn sidebar_hidden(&self) -> bool {
        self.terminal_width < NARROW_TERMINAL_WIDTH && !self.state.ui.sidebar_open
    }

    /// Feeds finished guide loads back into the state.
    fn poll_content(&mut self) {
        for loaded in self.resolver.poll() {
            self.handle_message(Message::ContentReady(loaded.id, loaded.provider));
        }
    }

    /// Returns true when the application should quit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            // First press or timeout expired
            self.last_ctrl_c_press = Some(Instant::now());
            self.execute_command(Command::ShowMessage(EXIT_PROMPT.to_string()));
            return self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
        }

        if self.state.mode == Mode::Help {
            let message = self.renderer.get_help_dialog_mut().handle_key(key);
            return message.is_some_and(|msg| self.handle_message(msg));
        }

        // Single-letter shortcuts; in search mode letters are query text
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if self.state.mode != Mode::Search && plain {
            let global = match key.code {
                KeyCode::Char('?') => Some(Message::ShowHelp),
                KeyCode::Char('q') => Some(Message::Quit),
                KeyCode::Char('t') => Some(Message::ToggleTheme),
                KeyCode::Char('b') => Some(Message::ToggleSidebar),
                KeyCode::Char('/') => Some(Message::FocusSearch),
                _ => None,
            };
            if let Some(msg) = global {
                return self.handle_message(msg);
            }
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Sidebar => match key.code {
                KeyCode::Tab => Some(Message::FocusContent),
                // Open the overlay instead of moving an invisible cursor
                _ if self.sidebar_hidden() => Some(Message::ToggleSidebar),
                _ => self.renderer.get_sidebar_mut().handle_key(key),
            },
            Mode::Content => match key.code {
                KeyCode::Tab => Some(Message::FocusSidebar),
                _ => self.renderer.get_content_view_mut().handle_key(key),
            },
            Mode::Help => None,
        };

        message.is_some_and(|msg| self.handle_message(msg))
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let popup_key = match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Enter => {
                true
            }
            KeyCode::Char('p') | KeyCode::Char('n') => key.modifiers == KeyModifiers::CONTROL,
            _ => false,
        };

        match key.code {
            KeyCode::Esc => Some(Message::ClearSearch),
            KeyCode::Tab => Some(Message::FocusSidebar),
            _ if popup_key && self.state.selection.results_visible() => {
                self.renderer.get_result_popup_mut().handle_key(key)
            }
            _ if popup_key => None,
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    /// Applies a message and its command; returns true when the application should quit.
    fn handle_message(&mut self, message: Message) -> bool {
        let command = self.state.update(message);
        let quit = self.execute_command(command);
        self.renderer.sync(&self.state);
        quit
    }

    fn execute_command(&mut self, command: Command) -> bool {
        match command {
            Command::None => false,
            Command::ResolveContent(selected) => {
                match self.resolver.resolve(&selected.id, &selected.title) {
                    Resolution::Ready(provider) => {
                        self.handle_message(Message::ContentReady(selected.id, provider))
                    }
                    Resolution::Pending => self.handle_message(Message::ContentPending(selected.id)),
                }
            }
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
                self.renderer.sync(&self.state);
                false
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
                false
            }
            Command::Quit => true,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, key: KeyEvent) -> bool {
        self.handle_input(key)
    }

    /// Blocks until pending guide loads finish and applies them.
    #[cfg(test)]
    pub(crate) fn settle(&mut self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while self.state.content.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.resolver.wait(remaining) {
                Some(loaded) => {
                    self.handle_message(Message::ContentReady(loaded.id, loaded.provider));
                }
                None => break,
            }
        }
    }
}
