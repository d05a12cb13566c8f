use crate::catalog::{SubtopicId, TopicId};
use crate::content::Provider;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    ChooseSearchResult(usize),
    ClearSearch,

    // Navigation
    ToggleTopic(TopicId),
    SelectSubtopic(SubtopicId),
    CollapseTopic,

    // Content
    ContentPending(SubtopicId),
    ContentReady(SubtopicId, Provider),

    // Mode changes
    FocusSearch,
    FocusSidebar,
    FocusContent,
    ShowHelp,
    CloseHelp,

    // Display options
    ToggleTheme,
    ToggleSidebar,

    // UI events
    SetStatus(String),
    ClearStatus,

    Quit,
}
