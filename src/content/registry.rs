use crate::catalog::SubtopicId;
use std::collections::HashMap;

macro_rules! builtin_guides {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../../data/guides/", $id, ".md")))),*]
    };
}

static BUILTIN_GUIDES: &[(&str, &str)] = builtin_guides![
    "1.1", "1.2", "1.3", "1.4", "1.5", "1.6", "1.7", "1.8", "1.9", "1.10", "1.11", "1.12",
    "1.13", "1.14", "1.15", "1.16", "2.1", "2.2", "2.3", "2.4", "2.5", "2.6", "3.1", "3.2",
    "3.3", "3.4", "3.5", "3.6", "3.7", "3.8", "3.9", "3.10", "3.11", "3.12", "4.1", "4.2",
    "4.3", "4.4", "4.5", "4.6", "5.1", "5.2", "5.3", "5.4", "6.1", "7.1", "7.2", "7.3",
];

/// Guide sources keyed by subtopic id.
pub struct GuideRegistry {
    sources: HashMap<SubtopicId, &'static str>,
}

impl GuideRegistry {
    pub fn builtin() -> Self {
        Self::from_sources(BUILTIN_GUIDES.iter().copied())
    }

    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            sources: sources
                .into_iter()
                .map(|(id, source)| (SubtopicId::new(id), source))
                .collect(),
        }
    }

    pub fn is_registered(&self, id: &SubtopicId) -> bool {
        self.sources.contains_key(id)
    }

    pub fn source(&self, id: &SubtopicId) -> Option<&'static str> {
        self.sources.get(id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SubtopicId> {
        self.sources.keys()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
