//! The static topic tree shown in the sidebar.
//!
//! Subtopic ids look numeric ("1.1", "1.10") but are kept as strings
//! everywhere: as numbers "1.1" and "1.10" would be the same key.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

#[cfg(test)]
pub(crate) mod fixtures;

const BUILTIN_TOPICS: &str = include_str!("../../data/topics.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub u32);

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtopicId(String);

impl SubtopicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubtopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubtopicId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub id: SubtopicId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub subtopics: Vec<Subtopic>,
}

/// Owned handle to a topic, carried by search results and selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicRef {
    pub id: TopicId,
    pub title: String,
}

impl From<&Topic> for TopicRef {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    topics: Vec<Topic>,
    topic_index: HashMap<TopicId, usize>,
    // subtopic id -> (topic position, subtopic position)
    subtopic_index: HashMap<SubtopicId, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate or empty ids and empty titles.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut topic_index = HashMap::with_capacity(topics.len());
        let mut subtopic_index: HashMap<SubtopicId, (usize, usize)> = HashMap::new();

        for (topic_pos, topic) in topics.iter().enumerate() {
            if topic.title.trim().is_empty() {
                return Err(CatalogError::EmptyTopicTitle(topic.id));
            }
            if topic_index.insert(topic.id, topic_pos).is_some() {
                return Err(CatalogError::DuplicateTopicId(topic.id));
            }

            for (sub_pos, subtopic) in topic.subtopics.iter().enumerate() {
                if subtopic.id.as_str().trim().is_empty() {
                    return Err(CatalogError::EmptySubtopicId(topic.id));
                }
                if subtopic.title.trim().is_empty() {
                    return Err(CatalogError::EmptySubtopicTitle(subtopic.id.clone()));
                }
                match subtopic_index.entry(subtopic.id.clone()) {
                    Entry::Occupied(existing) => {
                        let (first_pos, _) = *existing.get();
                        return Err(CatalogError::DuplicateSubtopicId {
                            id: subtopic.id.clone(),
                            first: topics[first_pos].id,
                            second: topic.id,
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert((topic_pos, sub_pos));
                    }
                }
            }
        }

        Ok(Self {
            topics,
            topic_index,
            subtopic_index,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        Self::from_topics(topics)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_TOPICS)?;
        tracing::debug!(
            topics = catalog.topic_count(),
            subtopics = catalog.subtopic_count(),
            "Loaded builtin catalog"
        );
        Ok(catalog)
    }

    /// All topics in author-defined order.
    pub fn all_topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn find_topic(&self, id: TopicId) -> Option<&Topic> {
        self.topic_index.get(&id).map(|&pos| &self.topics[pos])
    }

    pub fn find_subtopic(&self, id: &SubtopicId) -> Option<&Subtopic> {
        self.subtopic_index
            .get(id)
            .map(|&(topic_pos, sub_pos)| &self.topics[topic_pos].subtopics[sub_pos])
    }

    /// The topic that contains the given subtopic.
    pub fn find_subtopic_owner(&self, id: &SubtopicId) -> Option<&Topic> {
        self.subtopic_index
            .get(id)
            .map(|&(topic_pos, _)| &self.topics[topic_pos])
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn subtopic_count(&self) -> usize {
        self.subtopic_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
