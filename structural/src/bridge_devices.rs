//! Pattern 9: Bridge, device-style
//!
//! A remote-control hierarchy over explicit concrete devices. The
//! extended remote adds mute without the devices learning anything new;
//! the devices gain a model without the remotes changing.

pub trait Device {
    fn name(&self) -> &str;
    fn volume(&self) -> u8;
    fn set_volume(&mut self, percent: u8) -> String;
}

pub struct Tv {
    volume: u8,
}

impl Tv {
    pub fn new() -> Self {
        Tv { volume: 30 }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Tv {
    fn name(&self) -> &str {
        "tv"
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) -> String {
        self.volume = percent.min(100);
        format!("tv: volume {}%", self.volume)
    }
}

pub struct Radio {
    volume: u8,
}

impl Radio {
    pub fn new() -> Self {
        Radio { volume: 20 }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Radio {
    fn name(&self) -> &str {
        "radio"
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) -> String {
        self.volume = percent.min(100);
        format!("radio: volume {}%", self.volume)
    }
}

/// The base abstraction: volume stepping over any device.
pub struct BasicRemote {
    device: Box<dyn Device>,
}

impl BasicRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        BasicRemote { device }
    }

    pub fn volume_up(&mut self) -> String {
        let next = self.device.volume().saturating_add(10).min(100);
        self.device.set_volume(next)
    }

    pub fn volume_down(&mut self) -> String {
        let next = self.device.volume().saturating_sub(10);
        self.device.set_volume(next)
    }

    pub fn device_name(&self) -> &str {
        self.device.name()
    }
}

/// The refined abstraction: everything the basic remote does, plus mute
/// with restore. The devices are untouched.
pub struct AdvancedRemote {
    remote: BasicRemote,
    saved_volume: u8,
}

impl AdvancedRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        AdvancedRemote {
            remote: BasicRemote::new(device),
            saved_volume: 0,
        }
    }

    pub fn volume_up(&mut self) -> String {
        self.remote.volume_up()
    }

    pub fn volume_down(&mut self) -> String {
        self.remote.volume_down()
    }

    pub fn mute(&mut self) -> String {
        self.saved_volume = self.remote.device.volume();
        self.remote.device.set_volume(0)
    }

    pub fn unmute(&mut self) -> String {
        self.remote.device.set_volume(self.saved_volume)
    }

    pub fn device_name(&self) -> &str {
        self.remote.device_name()
    }
}
