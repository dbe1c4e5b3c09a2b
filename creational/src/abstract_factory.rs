//! Pattern 3: Abstract Factory
//!
//! A factory trait produces a whole family of related widgets. Picking a
//! family by discriminator swaps every widget the factory makes at once;
//! nothing downstream of the factory names a concrete type.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FamilyError {
    #[error("unknown widget family: {0}")]
    UnknownFamily(String),
}

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

/// The abstract factory: one method per widget kind in the family.
pub trait WidgetFactory: std::fmt::Debug {
    fn family(&self) -> &str;
    fn button(&self, label: &str) -> Box<dyn Button>;
    fn checkbox(&self, label: &str) -> Box<dyn Checkbox>;
}

struct MacButton {
    label: String,
}

impl Button for MacButton {
    fn render(&self) -> String {
        format!("[mac] button: {}", self.label)
    }
}

struct MacCheckbox {
    label: String,
}

impl Checkbox for MacCheckbox {
    fn render(&self) -> String {
        format!("[mac] checkbox: {}", self.label)
    }
}

struct WinButton {
    label: String,
}

impl Button for WinButton {
    fn render(&self) -> String {
        format!("[win] button: {}", self.label)
    }
}

struct WinCheckbox {
    label: String,
}

impl Checkbox for WinCheckbox {
    fn render(&self) -> String {
        format!("[win] checkbox: {}", self.label)
    }
}

#[derive(Debug)]
pub struct MacFactory;

impl WidgetFactory for MacFactory {
    fn family(&self) -> &str {
        "mac"
    }

    fn button(&self, label: &str) -> Box<dyn Button> {
        Box::new(MacButton {
            label: label.to_string(),
        })
    }

    fn checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox {
            label: label.to_string(),
        })
    }
}

#[derive(Debug)]
pub struct WinFactory;

impl WidgetFactory for WinFactory {
    fn family(&self) -> &str {
        "win"
    }

    fn button(&self, label: &str) -> Box<dyn Button> {
        Box::new(WinButton {
            label: label.to_string(),
        })
    }

    fn checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox {
            label: label.to_string(),
        })
    }
}

/// Family selection by discriminator; same error taxonomy as the factory
/// method entry.
pub fn factory_for(family: &str) -> Result<Box<dyn WidgetFactory>, FamilyError> {
    match family {
        "mac" => Ok(Box::new(MacFactory)),
        "win" => Ok(Box::new(WinFactory)),
        other => Err(FamilyError::UnknownFamily(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_family_renders_mac_widgets() {
        let factory = factory_for("mac").unwrap();
        assert_eq!(factory.button("ok").render(), "[mac] button: ok");
        assert_eq!(factory.checkbox("remember me").render(), "[mac] checkbox: remember me");
    }

    #[test]
    fn win_family_renders_win_widgets() {
        let factory = factory_for("win").unwrap();
        assert_eq!(factory.button("ok").render(), "[win] button: ok");
        assert_eq!(factory.checkbox("remember me").render(), "[win] checkbox: remember me");
    }

    #[test]
    fn widgets_from_one_factory_share_a_family_tag() {
        let factory = factory_for("mac").unwrap();
        let button = factory.button("ok").render();
        let checkbox = factory.checkbox("ok").render();
        assert!(button.starts_with("[mac]"));
        assert!(checkbox.starts_with("[mac]"));
    }

    #[test]
    fn unknown_family_is_an_error() {
        let err = factory_for("beos").unwrap_err();
        assert_eq!(err, FamilyError::UnknownFamily("beos".to_string()));
    }
}
