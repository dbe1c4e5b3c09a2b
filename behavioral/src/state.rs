//! Pattern 7: State
//!
//! The player forwards `press_play` to whatever state is currently bound.
//! The operation never swaps the binding; `set_state` is the only way the
//! binding changes.

pub trait PlayerState {
    fn label(&self) -> &str;
    fn press_play(&self) -> String;
}

pub struct Stopped;

impl PlayerState for Stopped {
    fn label(&self) -> &str {
        "stopped"
    }

    fn press_play(&self) -> String {
        "starting playback from the top".to_string()
    }
}

pub struct Playing;

impl PlayerState for Playing {
    fn label(&self) -> &str {
        "playing"
    }

    fn press_play(&self) -> String {
        "already playing, ignoring".to_string()
    }
}

pub struct Paused;

impl PlayerState for Paused {
    fn label(&self) -> &str {
        "paused"
    }

    fn press_play(&self) -> String {
        "resuming from pause".to_string()
    }
}

pub struct MediaPlayer {
    state: Box<dyn PlayerState>,
}

impl MediaPlayer {
    pub fn new() -> Self {
        MediaPlayer {
            state: Box::new(Stopped),
        }
    }

    /// Forwards to the bound state. Never rebinds.
    pub fn press_play(&self) -> String {
        self.state.press_play()
    }

    /// The only path that changes the binding.
    pub fn set_state(&mut self, state: Box<dyn PlayerState>) {
        self.state = state;
    }

    pub fn state_label(&self) -> &str {
        self.state.label()
    }
}

impl Default for MediaPlayer {
    fn default() -> Self {
        Self::new()
    }
}
