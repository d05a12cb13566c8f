use thiserror::Error;

use crate::catalog::{SubtopicId, TopicId};

/// Defects in the topic catalog. Navigation and content lookup are keyed by
/// ids, so any of these aborts startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate topic id: {0}")]
    DuplicateTopicId(TopicId),

    #[error("Duplicate subtopic id {id} (in topics {first} and {second})")]
    DuplicateSubtopicId {
        id: SubtopicId,
        first: TopicId,
        second: TopicId,
    },

    #[error("Topic {0} has an empty title")]
    EmptyTopicTitle(TopicId),

    #[error("Topic {0} contains a subtopic with an empty id")]
    EmptySubtopicId(TopicId),

    #[error("Subtopic {0} has an empty title")]
    EmptySubtopicTitle(SubtopicId),
}
