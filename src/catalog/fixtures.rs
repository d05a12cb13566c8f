use super::{Catalog, Subtopic, SubtopicId, Topic, TopicId};
use std::sync::Arc;

pub fn subtopic(id: &str, title: &str) -> Subtopic {
    Subtopic {
        id: SubtopicId::new(id),
        title: title.to_string(),
    }
}

pub fn topic(id: u32, title: &str, subtopics: Vec<Subtopic>) -> Topic {
    Topic {
        id: TopicId(id),
        title: title.to_string(),
        subtopics,
    }
}

/// A small catalog shaped like the builtin one, including the "1.1"/"1.10" pair.
pub fn sample_catalog() -> Arc<Catalog> {
    let topics = vec![
        topic(
            1,
            "Core JavaScript Concepts",
            vec![
                subtopic("1.1", "Variables and Data Types"),
                subtopic("1.2", "Operators"),
                subtopic("1.9", "Hoisting"),
                subtopic("1.10", "Closures"),
                subtopic("1.11", "The this keyword"),
            ],
        ),
        topic(
            2,
            "DOM & Browser APIs",
            vec![
                subtopic("2.1", "DOM manipulation"),
                subtopic("2.2", "Event handling (addEventListener)"),
            ],
        ),
        topic(
            3,
            "ES6+ Features",
            vec![
                subtopic("3.2", "Arrow functions"),
                subtopic("3.9", "Promises"),
                subtopic("3.10", "Async/await"),
            ],
        ),
    ];
    Arc::new(Catalog::from_topics(topics).unwrap())
}
