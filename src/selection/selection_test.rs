#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::search::ResultKind;

    fn create_test_state() -> SelectionState {
        SelectionState::new(sample_catalog())
    }

    fn sid(id: &str) -> SubtopicId {
        SubtopicId::new(id)
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.expanded_topic(), None);
        assert!(state.selected_subtopic().is_none());
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_toggle_topic_twice_restores_state() {
        let mut state = create_test_state();

        state.toggle_topic(TopicId(2));
        assert_eq!(state.expanded_topic(), Some(TopicId(2)));
        assert_eq!(state.phase(), Phase::TopicExpanded(TopicId(2)));

        state.toggle_topic(TopicId(2));
        assert_eq!(state.expanded_topic(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_only_one_topic_expanded() {
        let mut state = create_test_state();

        state.toggle_topic(TopicId(1));
        state.toggle_topic(TopicId(3));

        assert_eq!(state.expanded_topic(), Some(TopicId(3)));
    }

    #[test]
    fn test_toggle_keeps_selected_subtopic() {
        let mut state = create_test_state();

        state.select_subtopic(&sid("1.10"));
        state.toggle_topic(TopicId(2));

        assert_eq!(state.expanded_topic(), Some(TopicId(2)));
        assert_eq!(state.selected_subtopic().unwrap().id, sid("1.10"));
        assert_eq!(state.phase(), Phase::ContentShown(sid("1.10")));
    }

    #[test]
    fn test_select_subtopic_expands_owner() {
        let mut state = create_test_state();
        state.toggle_topic(TopicId(2));

        state.select_subtopic(&sid("3.10"));

        assert_eq!(state.expanded_topic(), Some(TopicId(3)));
        let selected = state.selected_subtopic().unwrap();
        assert_eq!(selected.title, "Async/await");
        assert_eq!(selected.parent.id, TopicId(3));
        assert_eq!(selected.display_title(), "3.10 Async/await");
    }

    #[test]
    fn test_select_every_subtopic_expands_its_parent() {
        let mut state = create_test_state();
        let catalog = state.catalog().clone();

        for topic in catalog.all_topics() {
            for subtopic in &topic.subtopics {
                state.select_subtopic(&subtopic.id);
                assert_eq!(state.expanded_topic(), Some(topic.id));
            }
        }
    }

    #[test]
    fn test_query_change_shows_results() {
        let mut state = create_test_state();

        state.on_query_change("clos");

        assert_eq!(state.query(), "clos");
        assert_eq!(state.results().len(), 1);
        assert!(state.results_visible());
        assert_eq!(state.results()[0].kind(), ResultKind::Subtopic);
    }

    #[test]
    fn test_query_without_matches_hides_results() {
        let mut state = create_test_state();

        state.on_query_change("xyzxyz");

        assert!(state.results().is_empty());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_blank_query_hides_results() {
        let mut state = create_test_state();
        state.on_query_change("clos");
        assert!(state.results_visible());

        state.on_query_change("   ");

        assert!(state.results().is_empty());
        assert!(!state.results_visible());
        assert_eq!(state.query(), "   ");
    }

    #[test]
    fn test_topic_result_click() {
        let mut state = create_test_state();
        state.on_query_change("javascript concepts");
        let result = state.results()[0].clone();
        assert_eq!(result.display_title(), "1. Core JavaScript Concepts");

        state.on_search_result_click(&result);

        assert_eq!(state.expanded_topic(), Some(TopicId(1)));
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_topic_result_click_toggles_open_topic() {
        let mut state = create_test_state();
        state.toggle_topic(TopicId(1));
        state.on_query_change("javascript concepts");
        let result = state.results()[0].clone();

        state.on_search_result_click(&result);

        assert_eq!(state.expanded_topic(), None);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_subtopic_result_click() {
        let mut state = create_test_state();
        state.toggle_topic(TopicId(2));
        state.on_query_change("clos");
        let result = state.results()[0].clone();

        state.on_search_result_click(&result);

        assert_eq!(state.expanded_topic(), Some(TopicId(1)));
        assert_eq!(state.selected_subtopic().unwrap().id, sid("1.10"));
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_clear_search_keeps_navigation() {
        let mut state = create_test_state();
        state.select_subtopic(&sid("1.2"));
        state.on_query_change("hoist");

        state.clear_search();

        assert_eq!(state.query(), "");
        assert!(!state.results_visible());
        assert_eq!(state.expanded_topic(), Some(TopicId(1)));
        assert_eq!(state.selected_subtopic().unwrap().id, sid("1.2"));
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn test_unknown_topic_panics() {
        let mut state = create_test_state();
        state.toggle_topic(TopicId(99));
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn test_unknown_subtopic_panics() {
        let mut state = create_test_state();
        state.select_subtopic(&sid("9.9"));
    }
}
