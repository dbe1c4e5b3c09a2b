//! Pattern 1: Chain of Responsibility
//!
//! Handlers link through an optional successor. Each handler either claims
//! the request, emitting exactly one trace line, or passes it on. A
//! request no handler claims falls off the end of the chain silently: the
//! trace comes back empty and no error is raised. That terminal behavior
//! is the contract, not an oversight.

pub trait Handler {
    fn handle(&self, request: &str) -> Vec<String>;
}

/// A handler that claims requests for one topic and forwards the rest.
pub struct TopicHandler {
    name: String,
    topic: String,
    next: Option<Box<dyn Handler>>,
}

impl TopicHandler {
    pub fn new(
        name: impl Into<String>,
        topic: impl Into<String>,
        next: Option<Box<dyn Handler>>,
    ) -> Self {
        TopicHandler {
            name: name.into(),
            topic: topic.into(),
            next,
        }
    }
}

impl Handler for TopicHandler {
    fn handle(&self, request: &str) -> Vec<String> {
        if request == self.topic {
            vec![format!("{} handled {}", self.name, request)]
        } else if let Some(next) = &self.next {
            next.handle(request)
        } else {
            Vec::new()
        }
    }
}
