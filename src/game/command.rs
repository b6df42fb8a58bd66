//! Player commands and where they come from

use crate::data::{Direction, Room};
use crate::game::SessionEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One thing the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Go(Direction),
    Stop,
    /// Any key the game does not know
    Invalid(char),
}

impl Command {
    pub const LEFT: Command = Command::Go(Direction::Left);
    pub const RIGHT: Command = Command::Go(Direction::Right);

    /// Map a typed key: `e` left, `d` right, `s` stop, case-insensitive
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'e' => Command::LEFT,
            'd' => Command::RIGHT,
            's' => Command::Stop,
            _ => Command::Invalid(key),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Go(direction) => write!(f, "go {}", direction),
            Command::Stop => write!(f, "stop"),
            Command::Invalid(key) => write!(f, "invalid key {:?}", key),
        }
    }
}

/// Supplies commands to a session and hears what happened
pub trait CommandSource {
    /// Next command while standing in `room`; `None` once input has run out
    fn next_command(&mut self, room: &Room) -> Option<Command>;

    fn observe(&mut self, _event: &SessionEvent) {}
}

/// A fixed list of commands, then end of input
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: VecDeque<Command>,
    pub seen: Vec<SessionEvent>,
}

impl Script {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Build from typed keys, e.g. `"eds"`
    pub fn keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Command::from_key))
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for Script {
    fn next_command(&mut self, _room: &Room) -> Option<Command> {
        self.commands.pop_front()
    }

    fn observe(&mut self, event: &SessionEvent) {
        self.seen.push(event.clone());
    }
}
