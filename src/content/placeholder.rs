use super::{Block, ContentProvider, Document};
use crate::catalog::SubtopicId;

/// Stub page for a subtopic that has no guide yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub id: SubtopicId,
    pub title: String,
}

impl Placeholder {
    pub fn new(id: SubtopicId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl ContentProvider for Placeholder {
    fn render(&self) -> Document {
        Document {
            title: format!("{} {}", self.id, self.title),
            blocks: vec![
                Block::Heading("Description".to_string()),
                Block::Paragraph("Description will go here...".to_string()),
                Block::Heading("Example".to_string()),
            ],
        }
    }
}
