//! Pattern 8: Strategy
//!
//! Checkout forwards cost questions to whichever shipping strategy is
//! bound. `set_strategy` is the only way the binding changes; the cost
//! call itself never does.

pub trait ShippingStrategy {
    fn name(&self) -> &str;
    fn cost(&self, weight_kg: u32) -> u32;
}

pub struct FlatRate;

impl ShippingStrategy for FlatRate {
    fn name(&self) -> &str {
        "flat"
    }

    fn cost(&self, _weight_kg: u32) -> u32 {
        10
    }
}

pub struct PerKilogram;

impl ShippingStrategy for PerKilogram {
    fn name(&self) -> &str {
        "per-kg"
    }

    fn cost(&self, weight_kg: u32) -> u32 {
        3 * weight_kg
    }
}

pub struct Express;

impl ShippingStrategy for Express {
    fn name(&self) -> &str {
        "express"
    }

    fn cost(&self, weight_kg: u32) -> u32 {
        25 + 5 * weight_kg
    }
}

pub struct Checkout {
    strategy: Box<dyn ShippingStrategy>,
}

impl Checkout {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Checkout { strategy }
    }

    pub fn shipping_cost(&self, weight_kg: u32) -> u32 {
        self.strategy.cost(weight_kg)
    }

    /// Explicit rebind; nothing else swaps the strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}
