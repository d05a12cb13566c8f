#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::result_popup::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::interactive::ui::events::Message;
    use crate::search::{SearchResult, search};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn results_for(query: &str) -> Vec<SearchResult> {
        search(query, &sample_catalog())
    }

    fn popup_for(query: &str) -> ResultPopup {
        let mut popup = ResultPopup::new();
        popup.set_results(&results_for(query));
        popup
    }

    fn render_to_string(popup: &mut ResultPopup, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| popup.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_popup() {
        let mut popup = ResultPopup::new();
        popup.set_results(&[]);

        assert_eq!(popup.selected_index(), None);
        assert!(popup.handle_key(create_key_event(KeyCode::Enter)).is_none());
        assert!(popup.handle_key(create_key_event(KeyCode::Down)).is_none());
    }

    #[test]
    fn test_enter_chooses_highlighted_result() {
        let mut popup = popup_for("o");

        let msg = popup.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::ChooseSearchResult(0))));

        popup.handle_key(create_key_event(KeyCode::Down));
        popup.handle_key(create_key_event(KeyCode::Down));
        let msg = popup.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::ChooseSearchResult(2))));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let results = results_for("o");
        let mut popup = popup_for("o");

        popup.handle_key(create_key_event(KeyCode::Up));
        assert_eq!(popup.selected_index(), Some(0));

        popup.handle_key(create_key_event(KeyCode::PageDown));
        popup.handle_key(create_key_event(KeyCode::PageDown));
        assert_eq!(popup.selected_index(), Some(results.len() - 1));

        popup.handle_key(create_key_event(KeyCode::PageUp));
        assert_eq!(popup.selected_index(), Some(0));
    }

    #[test]
    fn test_ctrl_n_and_ctrl_p() {
        let mut popup = popup_for("o");

        popup.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(popup.selected_index(), Some(1));

        popup.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
        assert_eq!(popup.selected_index(), Some(0));

        // Plain letters are left to the search bar
        assert!(popup.handle_key(create_key_event(KeyCode::Char('n'))).is_none());
        assert_eq!(popup.selected_index(), Some(0));
    }

    #[test]
    fn test_new_results_reset_highlight() {
        let mut popup = popup_for("o");
        popup.handle_key(create_key_event(KeyCode::Down));
        popup.handle_key(create_key_event(KeyCode::Down));

        // Same results keep the highlight
        popup.set_results(&results_for("o"));
        assert_eq!(popup.selected_index(), Some(2));

        popup.set_results(&results_for("clos"));
        assert_eq!(popup.selected_index(), Some(0));
    }

    #[test]
    fn test_content_height_counts_parent_lines() {
        // One topic row plus one two-line subtopic row, plus borders
        let popup = popup_for("dom");
        assert_eq!(popup.content_height(), 1 + 2 + 2);
    }

    #[test]
    fn test_render_shows_titles_and_parents() {
        let mut popup = popup_for("clos");

        let content = render_to_string(&mut popup, 40, 5);

        assert!(content.contains("1.10 Closures"));
        assert!(content.contains("Core JavaScript Concepts"));
    }
}
