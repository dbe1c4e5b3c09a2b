//! Pattern 1: Adapter
//!
//! A European wall socket reports 220 V; US appliances expect 110 V. The
//! adapter implements the target interface and translates at the seam.

pub trait EuropeanSocket {
    fn voltage(&self) -> u32;
}

/// The adaptee: a concrete 220 V source.
pub struct WallSocket;

impl EuropeanSocket for WallSocket {
    fn voltage(&self) -> u32 {
        220
    }
}

/// The target interface US appliances are written against.
pub trait UsPowerOutlet {
    fn voltage(&self) -> u32;
}

pub struct StepDownAdapter<S: EuropeanSocket> {
    source: S,
}

impl<S: EuropeanSocket> StepDownAdapter<S> {
    pub fn new(source: S) -> Self {
        StepDownAdapter { source }
    }
}

impl<S: EuropeanSocket> UsPowerOutlet for StepDownAdapter<S> {
    fn voltage(&self) -> u32 {
        self.source.voltage() / 2
    }
}
