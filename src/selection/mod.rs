//! Expand/select/query state behind the sidebar and the search box.
//!
//! Kept free of rendering so it can be driven directly from tests. Ids
//! handed to the transitions must come from the catalog; anything else is
//! a bug in the caller and panics.

use crate::catalog::{Catalog, SubtopicId, TopicId, TopicRef};
use crate::search::{SearchResult, search};
use std::sync::Arc;

#[cfg(test)]
mod selection_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedSubtopic {
    pub id: SubtopicId,
    pub title: String,
    pub parent: TopicRef,
}

impl SelectedSubtopic {
    pub fn display_title(&self) -> String {
        format!("{} {}", self.id, self.title)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TopicExpanded(TopicId),
    ContentShown(SubtopicId),
}

pub struct SelectionState {
    catalog: Arc<Catalog>,
    expanded_topic: Option<TopicId>,
    selected_subtopic: Option<SelectedSubtopic>,
    query: String,
    results: Vec<SearchResult>,
    results_visible: bool,
}

impl SelectionState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            expanded_topic: None,
            selected_subtopic: None,
            query: String::new(),
            results: Vec::new(),
            results_visible: false,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn expanded_topic(&self) -> Option<TopicId> {
        self.expanded_topic
    }

    pub fn selected_subtopic(&self) -> Option<&SelectedSubtopic> {
        self.selected_subtopic.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_subtopic, self.expanded_topic) {
            (Some(selected), _) => Phase::ContentShown(selected.id.clone()),
            (None, Some(topic)) => Phase::TopicExpanded(topic),
            (None, None) => Phase::Idle,
        }
    }

    /// Collapses `id` if it is the expanded topic, otherwise expands it in
    /// place of whatever was open. The selected subtopic is left alone.
    pub fn toggle_topic(&mut self, id: TopicId) {
        assert!(
            self.catalog.find_topic(id).is_some(),
            "toggle_topic: topic {id} is not in the catalog"
        );

        self.expanded_topic = if self.expanded_topic == Some(id) {
            None
        } else {
            Some(id)
        };
        tracing::debug!(topic = %id, expanded = ?self.expanded_topic, "Toggled topic");
    }

    /// Selects a subtopic for display and expands its owning topic.
    pub fn select_subtopic(&mut self, id: &SubtopicId) {
        let owner = self.catalog.find_subtopic_owner(id);
        let subtopic = self.catalog.find_subtopic(id);
        let (Some(owner), Some(subtopic)) = (owner, subtopic) else {
            panic!("select_subtopic: subtopic {id} is not in the catalog");
        };

        self.expanded_topic = Some(owner.id);
        self.selected_subtopic = Some(SelectedSubtopic {
            id: subtopic.id.clone(),
            title: subtopic.title.clone(),
            parent: TopicRef::from(owner),
        });
        tracing::debug!(subtopic = %id, topic = %owner.id, "Selected subtopic");
    }

    /// Applies a chosen search result and closes the search.
    pub fn on_search_result_click(&mut self, result: &SearchResult) {
        match result {
            SearchResult::Topic { id, .. } => self.toggle_topic(*id),
            SearchResult::Subtopic { id, parent, .. } => {
                self.select_subtopic(id);
                assert_eq!(
                    self.expanded_topic,
                    Some(parent.id),
                    "search result for {id} names the wrong parent topic"
                );
            }
        }
        self.clear_search();
    }

    /// Recomputes the results for a new query.
    pub fn on_query_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = search(&self.query, &self.catalog);
        self.results_visible = !self.results.is_empty();
    }

    /// Empties the query and hides the results without touching expansion
    /// or selection.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.results.clear();
        self.results_visible = false;
    }
}
