use crate::catalog::{Catalog, SubtopicId, TopicId, TopicRef};
use crate::search::lowercase::FastLowercase;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Topic,
    Subtopic,
}

/// A title match. Rebuilt on every query change; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Topic {
        id: TopicId,
        title: String,
    },
    Subtopic {
        id: SubtopicId,
        title: String,
        #[serde(rename = "parentTopic")]
        parent: TopicRef,
    },
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Topic { .. } => ResultKind::Topic,
            SearchResult::Subtopic { .. } => ResultKind::Subtopic,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchResult::Topic { title, .. } | SearchResult::Subtopic { title, .. } => title,
        }
    }

    /// "1. Core JavaScript Concepts" for topics, "1.10 Closures" for subtopics.
    pub fn display_title(&self) -> String {
        match self {
            SearchResult::Topic { id, title } => format!("{id}. {title}"),
            SearchResult::Subtopic { id, title, .. } => format!("{id} {title}"),
        }
    }

    pub fn parent_topic(&self) -> Option<&TopicRef> {
        match self {
            SearchResult::Topic { .. } => None,
            SearchResult::Subtopic { parent, .. } => Some(parent),
        }
    }
}

/// Case-insensitive substring match against every topic title and every
/// subtopic title, in catalog order. A blank query yields nothing.
pub fn search(query: &str, catalog: &Catalog) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    // Only the emptiness check trims; the match itself uses the query as typed.
    let needle = query.fast_to_lowercase();
    let mut results = Vec::new();

    for topic in catalog.all_topics() {
        if topic.title.contains_lowercased(&needle) {
            results.push(SearchResult::Topic {
                id: topic.id,
                title: topic.title.clone(),
            });
        }

        for subtopic in &topic.subtopics {
            if subtopic.title.contains_lowercased(&needle) {
                results.push(SearchResult::Subtopic {
                    id: subtopic.id.clone(),
                    title: subtopic.title.clone(),
                    parent: TopicRef::from(topic),
                });
            }
        }
    }

    results
}

/// One line per result for terminal output, with the parent topic for subtopics.
pub fn format_search_result(result: &SearchResult, use_color: bool) -> String {
    use colored::Colorize;

    let display = result.display_title();
    match (result.parent_topic(), use_color) {
        (Some(parent), true) => format!(
            "{}  {}",
            display.bright_green(),
            format!("({})", parent.title).dimmed()
        ),
        (Some(parent), false) => format!("{display}  ({})", parent.title),
        (None, true) => display.bright_yellow().bold().to_string(),
        (None, false) => display,
    }
}
