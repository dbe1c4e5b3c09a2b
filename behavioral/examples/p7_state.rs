//! Pattern 7: State
//! Example: A media player whose behavior follows its bound state
//!
//! Run with: cargo run --example p7_state

use behavioral_patterns::state::{MediaPlayer, Paused, Playing};

fn main() {
    println!("=== State Demo ===\n");

    let mut player = MediaPlayer::new();
    println!("[{}] {}", player.state_label(), player.press_play());

    // The operation never rebinds; only set_state does.
    player.set_state(Box::new(Playing));
    println!("[{}] {}", player.state_label(), player.press_play());

    player.set_state(Box::new(Paused));
    println!("[{}] {}", player.state_label(), player.press_play());
}
