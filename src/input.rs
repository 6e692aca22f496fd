//! Keyboard to paddle command mapping
//!
//! The host forwards raw key events; only arrow keys and space mean anything.

use crate::sim::{Command, Direction};

/// DOM-style key codes
pub mod keys {
    pub const LEFT: u32 = 37;
    pub const RIGHT: u32 = 39;
    pub const SPACE: u32 = 32;
}

/// Raw key event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(u32),
    Up(u32),
}

/// Translate a key event into a paddle command.
///
/// Releasing any key stops the paddle. Unknown keys pressed map to nothing.
pub fn command_for(event: KeyEvent) -> Option<Command> {
    match event {
        KeyEvent::Down(keys::LEFT) => Some(Command::Start(Direction::Left)),
        KeyEvent::Down(keys::RIGHT) => Some(Command::Start(Direction::Right)),
        KeyEvent::Down(keys::SPACE) => Some(Command::Fire),
        KeyEvent::Down(_) => None,
        KeyEvent::Up(_) => Some(Command::Stop),
    }
}
