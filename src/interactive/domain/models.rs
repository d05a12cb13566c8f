use crate::catalog::SubtopicId;
use crate::content::Provider;

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Sidebar,
    Search,
    Content,
    Help,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// What the content pane currently shows.
#[derive(Clone, Debug)]
pub enum ContentPane {
    Empty,
    Loading(SubtopicId),
    Ready(Provider),
}

impl ContentPane {
    #[cfg(test)]
    pub(crate) fn subtopic_id(&self) -> Option<&SubtopicId> {
        match self {
            ContentPane::Empty => None,
            ContentPane::Loading(id) => Some(id),
            ContentPane::Ready(provider) => Some(provider.subtopic_id()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentPane::Loading(_))
    }
}
