pub mod catalog;
pub mod content;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod search;
pub mod selection;

pub use catalog::{Catalog, Subtopic, SubtopicId, Topic, TopicId, TopicRef};
pub use content::{
    ContentProvider, ContentResolver, Document, GuideRegistry, Provider, Resolution,
    document_to_text,
};
pub use error::CatalogError;
pub use search::{ResultKind, SearchResult, format_search_result, search};
pub use selection::{Phase, SelectedSubtopic, SelectionState};
