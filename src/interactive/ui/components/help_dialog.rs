use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog {
    styles: Styles,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    fn get_help_text(&self) -> Vec<Line<'static>> {
        let section = |title: &'static str| Line::from(vec![Span::styled(title, self.styles.heading())]);

        vec![
            Line::from(vec![Span::styled(
                "Learn JS & More - Keyboard Reference",
                self.styles.title(),
            )]),
            Line::from(""),
            section("Search:"),
            Line::from("  /           - Focus the search box"),
            Line::from("  ↑/↓         - Move through the results"),
            Line::from("  Enter       - Open the highlighted result"),
            Line::from("  Esc         - Clear the search"),
            Line::from("  Ctrl+W/U/K  - Delete word / to start / to end"),
            Line::from(""),
            section("Sidebar:"),
            Line::from("  ↑/↓ or j/k  - Move"),
            Line::from("  Enter/Space - Toggle topic or open subtopic"),
            Line::from("  →/l         - Expand topic or open subtopic"),
            Line::from("  ←/h         - Collapse topic"),
            Line::from(""),
            section("Content:"),
            Line::from("  ↑/↓ or j/k  - Scroll"),
            Line::from("  PgUp/PgDn   - Scroll a page"),
            Line::from("  Space       - Scroll down a page"),
            Line::from("  Home/End    - Jump to top / bottom"),
            Line::from("  Esc         - Back to the sidebar"),
            Line::from(""),
            section("General:"),
            Line::from("  Tab         - Switch between sidebar and content"),
            Line::from("  t           - Toggle dark/light theme"),
            Line::from("  b           - Show/hide the sidebar on narrow terminals"),
            Line::from("  ?           - Show this help"),
            Line::from("  q           - Quit (Ctrl+C twice also quits)"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = self.get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(self.styles.border(true)),
            )
            .style(self.styles.base())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();
        let msg = dialog.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::CloseHelp)));
    }

    #[test]
    fn test_render_lists_bindings() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Help"));
        assert!(content.contains("Toggle dark/light theme"));
        assert!(content.contains("Press any key to close this help"));
    }

    #[test]
    fn test_render_lists_every_content_scroll_key() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("PgUp/PgDn   - Scroll a page"));
        assert!(content.contains("Space       - Scroll down a page"));
        assert!(content.contains("Home/End    - Jump to top / bottom"));
        assert!(content.contains("→/l         - Expand topic or open subtopic"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(3, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    }
}
