//! Pattern 2: Factory Method
//!
//! One constructor function selects the concrete animal by a string
//! discriminator. Callers only ever see the `Animal` capability.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreationError {
    #[error("unknown animal kind: {0}")]
    UnknownKind(String),
}

pub trait Animal: std::fmt::Debug {
    fn name(&self) -> &str;
    fn speak(&self) -> String;
}

#[derive(Debug)]
pub struct Dog;

impl Animal for Dog {
    fn name(&self) -> &str {
        "dog"
    }

    fn speak(&self) -> String {
        "Woof!".to_string()
    }
}

#[derive(Debug)]
pub struct Cat;

impl Animal for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn speak(&self) -> String {
        "Meow!".to_string()
    }
}

/// The factory method. An unrecognized kind is an error the caller must
/// handle; it is never swallowed.
pub fn make_animal(kind: &str) -> Result<Box<dyn Animal>, CreationError> {
    match kind {
        "dog" => Ok(Box::new(Dog)),
        "cat" => Ok(Box::new(Cat)),
        other => Err(CreationError::UnknownKind(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_discriminator_yields_woof() {
        let animal = make_animal("dog").unwrap();
        assert_eq!(animal.speak(), "Woof!");
        assert_eq!(animal.name(), "dog");
    }

    #[test]
    fn cat_discriminator_yields_meow() {
        let animal = make_animal("cat").unwrap();
        assert_eq!(animal.speak(), "Meow!");
    }

    #[test]
    fn unknown_discriminator_is_an_error() {
        let err = make_animal("fox").unwrap_err();
        assert_eq!(err, CreationError::UnknownKind("fox".to_string()));
        assert_eq!(err.to_string(), "unknown animal kind: fox");
    }

    #[test]
    fn speaking_twice_replays_the_same_line() {
        let animal = make_animal("dog").unwrap();
        assert_eq!(animal.speak(), animal.speak());
    }
}
