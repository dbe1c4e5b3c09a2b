//! Pattern 5: Memento
//!
//! The editor hands out opaque snapshots of its state. Restoring replaces
//! the current state wholesale; there is no partial or merged restore.
//! The caretaker stacks snapshots without ever looking inside them.

pub struct Editor {
    state: String,
}

/// Opaque to everyone but `Editor`; the caretaker can hold it, not read it.
pub struct Snapshot {
    state: String,
}

impl Editor {
    pub fn new(state: impl Into<String>) -> Self {
        Editor {
            state: state.into(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn save(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.state = snapshot.state.clone();
    }
}

#[derive(Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
