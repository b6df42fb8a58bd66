//! Detective Quest: The Mansion Mystery
//!
//! A text investigation game where you walk the rooms of a mansion,
//! collect clues, and name the most likely suspect.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left or right through a fixed tree of rooms
//! - **Evidence**: Every arrival at a room reveals its clue
//! - **Deduction**: Clues are attributed to suspects, the highest tally wins
//!
//! # Architecture
//!
//! - `data` - Room map, clue index and suspect registry
//! - `game` - Commands, the investigation session and the final report
//! - `console` - Line-oriented terminal input and styled output

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::{InvestigationSession, ReportGenerator};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvestigationError {
    #[error("Map has no root room")]
    MissingRoot,

    #[error("Room {room:?} placed under unknown parent {parent:?}")]
    UnknownParent { room: String, parent: String },

    #[error("Room {parent:?} already has a room to the {side}")]
    SlotTaken { parent: String, side: Direction },

    #[error("Room name used twice: {0}")]
    DuplicateRoom(String),

    #[error("Second root room: {0}")]
    ExtraRoot(String),

    #[error("Room cannot be reached from the root: {0}")]
    Unreachable(String),
}
