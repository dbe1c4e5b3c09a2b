//! Pattern 4: Mediator
//!
//! Participants never hold references to each other; the chat room owns
//! them all and routes every message by sender identity. The sender never
//! hears its own message back.

pub struct Participant {
    name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Participant { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, from: &str, message: &str) -> String {
        format!("{} hears {}: {}", self.name, from, message)
    }
}

#[derive(Default)]
pub struct ChatRoom {
    participants: Vec<Participant>,
}

impl ChatRoom {
    pub fn new() -> Self {
        ChatRoom {
            participants: Vec::new(),
        }
    }

    pub fn register(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Routes by sender identity: everyone but `from` hears the message,
    /// in registration order.
    pub fn send(&self, from: &str, message: &str) -> Vec<String> {
        let mut trace = vec![format!("{from} says: {message}")];
        trace.extend(
            self.participants
                .iter()
                .filter(|p| p.name() != from)
                .map(|p| p.receive(from, message)),
        );
        trace
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
