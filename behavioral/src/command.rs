//! Pattern 2: Command
//!
//! Requests reified as objects. Concrete commands close over a shared
//! receiver; the invoker queues them and runs the queue in order, knowing
//! nothing beyond the `Command` trait.

use std::rc::Rc;

pub trait Command {
    fn execute(&self) -> String;
}

/// The receiver: the thing commands ultimately act on.
pub struct Light {
    location: String,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Light {
            location: location.into(),
        }
    }

    fn turn_on(&self) -> String {
        format!("{} light: on", self.location)
    }

    fn turn_off(&self) -> String {
        format!("{} light: off", self.location)
    }
}

pub struct LightOn {
    light: Rc<Light>,
}

impl LightOn {
    pub fn new(light: Rc<Light>) -> Self {
        LightOn { light }
    }
}

impl Command for LightOn {
    fn execute(&self) -> String {
        self.light.turn_on()
    }
}

pub struct LightOff {
    light: Rc<Light>,
}

impl LightOff {
    pub fn new(light: Rc<Light>) -> Self {
        LightOff { light }
    }
}

impl Command for LightOff {
    fn execute(&self) -> String {
        self.light.turn_off()
    }
}

#[derive(Default)]
pub struct RemoteControl {
    queue: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        RemoteControl { queue: Vec::new() }
    }

    pub fn submit(&mut self, command: Box<dyn Command>) {
        self.queue.push(command);
    }

    /// Runs every queued command in submission order.
    pub fn run(&self) -> Vec<String> {
        self.queue.iter().map(|command| command.execute()).collect()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
