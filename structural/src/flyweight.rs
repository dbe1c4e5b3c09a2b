//! Pattern 6: Flyweight, factory-map variant
//!
//! A forest draws thousands of trees but only a handful of tree kinds.
//! The factory memoizes each kind by name in a single shared map; trees
//! carry only their position plus an `Rc` to the shared kind. The map is
//! never evicted; it lives as long as the factory.

use std::collections::HashMap;
use std::rc::Rc;

/// Intrinsic state: everything trees of one kind have in common.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeKind {
    name: String,
    texture: String,
}

impl TreeKind {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        format!("{} [{}]", self.name, self.texture)
    }
}

#[derive(Default)]
pub struct TreeKindFactory {
    cache: HashMap<String, Rc<TreeKind>>,
}

impl TreeKindFactory {
    pub fn new() -> Self {
        TreeKindFactory {
            cache: HashMap::new(),
        }
    }

    /// Returns the shared kind for `name`, building it on the first request.
    pub fn get(&mut self, name: &str) -> Rc<TreeKind> {
        Rc::clone(self.cache.entry(name.to_string()).or_insert_with(|| {
            Rc::new(TreeKind {
                name: name.to_string(),
                texture: format!("{name}.png"),
            })
        }))
    }

    pub fn kinds_built(&self) -> usize {
        self.cache.len()
    }
}

/// Extrinsic state: what is unique to each planted tree.
pub struct Tree {
    x: i32,
    y: i32,
    kind: Rc<TreeKind>,
}

impl Tree {
    pub fn new(x: i32, y: i32, kind: Rc<TreeKind>) -> Self {
        Tree { x, y, kind }
    }

    pub fn draw(&self) -> String {
        format!("{} at ({}, {})", self.kind.describe(), self.x, self.y)
    }

    pub fn kind(&self) -> &Rc<TreeKind> {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_returns_the_identical_shared_instance() {
        let mut factory = TreeKindFactory::new();
        let first = factory.get("oak");
        let second = factory.get("oak");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.kinds_built(), 1);
    }

    #[test]
    fn distinct_keys_return_distinct_instances() {
        let mut factory = TreeKindFactory::new();
        let oak = factory.get("oak");
        let pine = factory.get("pine");
        assert!(!Rc::ptr_eq(&oak, &pine));
        assert_eq!(factory.kinds_built(), 2);
    }

    #[test]
    fn a_forest_shares_kinds_across_trees() {
        let mut factory = TreeKindFactory::new();
        let forest: Vec<Tree> = (0..100)
            .map(|i| {
                let kind = factory.get(if i % 2 == 0 { "oak" } else { "pine" });
                Tree::new(i, -i, kind)
            })
            .collect();

        assert_eq!(factory.kinds_built(), 2);
        assert!(Rc::ptr_eq(forest[0].kind(), forest[2].kind()));
        assert_eq!(forest[1].draw(), "pine [pine.png] at (1, -1)");
    }
}
