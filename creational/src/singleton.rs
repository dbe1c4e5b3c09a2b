//! Pattern 1: Singleton
//!
//! A process-wide settings registry behind an explicit accessor. The
//! instance is built lazily on first access and lives for the rest of the
//! process; there is no other way to construct an [`AppRegistry`].

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Mutex;

/// The one registry instance. Interior mutability sits behind a `Mutex`
/// because the accessor hands out `&'static` borrows.
pub struct AppRegistry {
    settings: Mutex<HashMap<String, String>>,
}

lazy_static! {
    static ref INSTANCE: AppRegistry = AppRegistry {
        settings: Mutex::new(HashMap::new()),
    };
}

impl AppRegistry {
    /// Sole access path. Every call returns the same instance.
    pub fn instance() -> &'static AppRegistry {
        &INSTANCE
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.lock().unwrap().insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.settings.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.settings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_accesses_yield_the_same_instance() {
        let first = AppRegistry::instance();
        let second = AppRegistry::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn writes_through_one_handle_are_visible_through_another() {
        let writer = AppRegistry::instance();
        let reader = AppRegistry::instance();

        writer.set("singleton.test.theme", "dark");
        assert_eq!(reader.get("singleton.test.theme"), Some("dark".to_string()));
    }

    #[test]
    fn missing_keys_read_as_none() {
        assert_eq!(AppRegistry::instance().get("singleton.test.absent"), None);
    }
}
