//! Pattern 5: Prototype
//!
//! New objects come from deep-copying a configured original. `spawn` is a
//! default method over `Clone`, so any clonable role picks the capability
//! up for free.

pub trait Prototype: Clone {
    /// Deep copy. The spawn's nested state is independent of the original's.
    fn spawn(&self) -> Self {
        self.clone()
    }
}

/// A document template: owned `String` and `Vec` fields, so `Clone` copies
/// all nested data rather than sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    name: String,
    layers: Vec<i32>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, layers: Vec<i32>) -> Self {
        Blueprint {
            name: name.into(),
            layers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[i32] {
        &self.layers
    }

    pub fn add_layer(&mut self, layer: i32) {
        self.layers.push(layer);
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Prototype for Blueprint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_the_spawn_never_touches_the_original() {
        let original = Blueprint::new("site plan", vec![1, 2, 3]);
        let mut spawned = original.spawn();
        spawned.add_layer(4);

        assert_eq!(original.layers(), &[1, 2, 3]);
        assert_eq!(spawned.layers(), &[1, 2, 3, 4]);
    }

    #[test]
    fn spawn_starts_identical_to_the_original() {
        let original = Blueprint::new("site plan", vec![1, 2, 3]);
        assert_eq!(original.spawn(), original);
    }

    #[test]
    fn renaming_the_spawn_keeps_the_original_name() {
        let original = Blueprint::new("site plan", vec![]);
        let mut spawned = original.spawn();
        spawned.rename("floor plan");

        assert_eq!(original.name(), "site plan");
        assert_eq!(spawned.name(), "floor plan");
    }
}
