#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::content_view::*;
    use crate::catalog::SubtopicId;
    use crate::content::{GuideRegistry, Placeholder, Provider, parse_guide};
    use crate::interactive::domain::models::ContentPane;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn sid(id: &str) -> SubtopicId {
        SubtopicId::new(id)
    }

    fn placeholder_pane(id: &str, title: &str) -> ContentPane {
        ContentPane::Ready(Provider::Placeholder(Placeholder::new(sid(id), title)))
    }

    fn closures_pane() -> ContentPane {
        let registry = GuideRegistry::builtin();
        let source = registry.source(&sid("1.10")).unwrap();
        let guide = parse_guide(sid("1.10"), source).unwrap();
        ContentPane::Ready(Provider::Guide(Arc::new(guide)))
    }

    fn render_to_string(view: &mut ContentView, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
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
    fn test_empty_state() {
        let mut view = ContentView::new();
        view.set_content(&ContentPane::Empty);

        let content = render_to_string(&mut view, 80, 5);
        assert!(content.contains("Select a method from the sidebar to view its details"));
    }

    #[test]
    fn test_loading_state() {
        let mut view = ContentView::new();
        view.set_content(&ContentPane::Loading(sid("1.10")));

        let content = render_to_string(&mut view, 40, 5);
        assert!(content.contains("Loading..."));
    }

    #[test]
    fn test_placeholder_page() {
        let mut view = ContentView::new();
        view.set_content(&placeholder_pane("1.2", "Operators"));

        let content = render_to_string(&mut view, 40, 10);

        assert!(content.contains("1.2 Operators"));
        assert!(content.contains("Description"));
        assert!(content.contains("Description will go here..."));
        assert!(content.contains("Example"));
    }

    #[test]
    fn test_guide_page() {
        let mut view = ContentView::new();
        view.set_content(&closures_pane());

        let content = render_to_string(&mut view, 80, 40);

        assert!(content.contains("1.10 Closures"));
        assert!(content.contains("What is a closure?"));
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut view = ContentView::new();
        view.set_content(&closures_pane());
        render_to_string(&mut view, 60, 10);

        view.handle_key(create_key_event(KeyCode::Up));
        render_to_string(&mut view, 60, 10);
        assert_eq!(view.scroll_offset(), 0);

        view.handle_key(create_key_event(KeyCode::Down));
        view.handle_key(create_key_event(KeyCode::Char('j')));
        render_to_string(&mut view, 60, 10);
        assert_eq!(view.scroll_offset(), 2);

        view.handle_key(create_key_event(KeyCode::End));
        render_to_string(&mut view, 60, 10);
        let bottom = view.scroll_offset();
        assert!(bottom > 2);
        assert!(bottom < u16::MAX);

        view.handle_key(create_key_event(KeyCode::Home));
        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_short_page_does_not_scroll() {
        let mut view = ContentView::new();
        view.set_content(&placeholder_pane("1.2", "Operators"));

        view.handle_key(create_key_event(KeyCode::PageDown));
        render_to_string(&mut view, 40, 20);

        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_resets_on_new_page_only() {
        let mut view = ContentView::new();
        view.set_content(&closures_pane());
        render_to_string(&mut view, 60, 10);
        view.handle_key(create_key_event(KeyCode::Down));

        // Same page again keeps the position
        view.set_content(&closures_pane());
        assert_eq!(view.scroll_offset(), 1);

        view.set_content(&ContentPane::Loading(sid("1.2")));
        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_escape_returns_to_sidebar() {
        let mut view = ContentView::new();

        let msg = view.handle_key(create_key_event(KeyCode::Esc));
        assert!(matches!(msg, Some(Message::FocusSidebar)));
    }
}
