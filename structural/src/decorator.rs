//! Pattern 4: Decorator
//!
//! Each decorator implements the same component trait, adds its own label,
//! and forwards to the component it wraps.

pub trait Component {
    fn describe(&self) -> String;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn describe(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct DecoratorA {
    inner: Box<dyn Component>,
}

impl DecoratorA {
    pub fn new(inner: Box<dyn Component>) -> Self {
        DecoratorA { inner }
    }
}

impl Component for DecoratorA {
    fn describe(&self) -> String {
        format!("DecoratorA({})", self.inner.describe())
    }
}

pub struct DecoratorB {
    inner: Box<dyn Component>,
}

impl DecoratorB {
    pub fn new(inner: Box<dyn Component>) -> Self {
        DecoratorB { inner }
    }
}

impl Component for DecoratorB {
    fn describe(&self) -> String {
        format!("DecoratorB({})", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_a_then_b_composes_inside_out() {
        let wrapped = DecoratorB::new(Box::new(DecoratorA::new(Box::new(ConcreteComponent))));
        assert_eq!(wrapped.describe(), "DecoratorB(DecoratorA(ConcreteComponent))");
    }

    #[test]
    fn wrapping_order_is_visible_in_the_trace() {
        let wrapped = DecoratorA::new(Box::new(DecoratorB::new(Box::new(ConcreteComponent))));
        assert_eq!(wrapped.describe(), "DecoratorA(DecoratorB(ConcreteComponent))");
    }

    #[test]
    fn bare_component_describes_itself() {
        assert_eq!(ConcreteComponent.describe(), "ConcreteComponent");
    }

    #[test]
    fn describing_twice_replays_the_same_trace() {
        let wrapped = DecoratorB::new(Box::new(DecoratorA::new(Box::new(ConcreteComponent))));
        assert_eq!(wrapped.describe(), wrapped.describe());
    }
}
