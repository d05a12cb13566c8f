//! Content shown for a selected subtopic.
//!
//! Every registered subtopic has a guide compiled into the binary. Guides
//! are parsed on a background worker the first time they are needed;
//! subtopics without a guide get a placeholder page instead.

pub mod guide;
pub mod placeholder;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod guide_test;

use std::sync::Arc;

use crate::catalog::SubtopicId;

pub use guide::{Guide, parse_guide};
pub use placeholder::Placeholder;
pub use registry::GuideRegistry;
pub use resolver::{ContentResolver, LoadedContent, Resolution};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Bullet(String),
    Code { lang: Option<String>, text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Something that can draw the page for one subtopic.
pub trait ContentProvider {
    fn render(&self) -> Document;
}

#[derive(Clone, Debug)]
pub enum Provider {
    Guide(Arc<Guide>),
    Placeholder(Placeholder),
}

impl Provider {
    pub fn subtopic_id(&self) -> &SubtopicId {
        match self {
            Provider::Guide(guide) => guide.id(),
            Provider::Placeholder(placeholder) => &placeholder.id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Provider::Placeholder(_))
    }
}

impl ContentProvider for Provider {
    fn render(&self) -> Document {
        match self {
            Provider::Guide(guide) => guide.render(),
            Provider::Placeholder(placeholder) => placeholder.render(),
        }
    }
}

/// Plain-text rendering used by the non-interactive `--show` output.
pub fn document_to_text(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&document.title);
    out.push('\n');

    for block in &document.blocks {
        match block {
            Block::Heading(text) => {
                out.push('\n');
                out.push_str(text);
                out.push('\n');
            }
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Bullet(text) => {
                out.push_str("  • ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Code { text, .. } => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    out
}
