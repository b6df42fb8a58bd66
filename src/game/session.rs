//! Investigation session
//!
//! Walks the player through the mansion. Each arrival at a room with a clue
//! files the clue in the index and attributes it to a suspect.

use crate::data::*;
use crate::game::{Command, CommandSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

/// Suspect the clue of `room` points at
pub fn suspect_for(room: &str) -> &'static str {
    match room {
        "Biblioteca" => "Mordomo",
        "Cozinha" => "Chef",
        _ => "Vizinho",
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy)]
pub enum SessionState<'m> {
    AtRoom(&'m Room),
    Stopped,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// The player chose to stop
    Stopped,
    /// An unknown key ends the session like a stop
    InvalidInput(char),
    /// No more input
    InputExhausted,
}

/// Something the player should hear about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Entered { room: String },
    ClueFound { room: String, clue: String, suspect: String, new_to_index: bool },
    NoRoom { room: String, direction: Direction },
    Ended(Ending),
}

/// A clue collected on one arrival
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub room: String,
    pub clue: String,
    pub suspect: String,
    pub new_to_index: bool,
    pub found_at: DateTime<Utc>,
}

/// Totals once the session is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Id,
    /// `None` while the session is still running
    pub ending: Option<Ending>,
    pub moves: u32,
    pub arrivals: u32,
    pub clues_indexed: usize,
}

/// One run through the mansion
#[derive(Debug)]
pub struct InvestigationSession<'m> {
    id: Id,
    state: SessionState<'m>,
    clues: ClueIndex,
    suspects: SuspectRegistry,
    journal: Vec<Discovery>,
    begun: bool,
    moves: u32,
    arrivals: u32,
    ending: Option<Ending>,
}

impl<'m> InvestigationSession<'m> {
    pub fn new(map: &'m RoomMap) -> Self {
        Self::resume(map, ClueIndex::new(), SuspectRegistry::new())
    }

    /// Start at the root again, keeping clues and suspects gathered earlier
    pub fn resume(map: &'m RoomMap, clues: ClueIndex, suspects: SuspectRegistry) -> Self {
        Self {
            id: Id::new(),
            state: SessionState::AtRoom(map.root()),
            clues,
            suspects,
            journal: Vec::new(),
            begun: false,
            moves: 0,
            arrivals: 0,
            ending: None,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn state(&self) -> SessionState<'m> {
        self.state
    }

    pub fn current_room(&self) -> Option<&'m Room> {
        match self.state {
            SessionState::AtRoom(room) => Some(room),
            SessionState::Stopped => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, SessionState::Stopped)
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectRegistry {
        &self.suspects
    }

    pub fn journal(&self) -> &[Discovery] {
        &self.journal
    }

    /// Arrive in the root room. Later calls do nothing.
    pub fn begin(&mut self) -> Vec<SessionEvent> {
        if self.begun {
            return Vec::new();
        }
        self.begun = true;
        match self.state {
            SessionState::AtRoom(room) => self.arrive(room),
            SessionState::Stopped => Vec::new(),
        }
    }

    /// Apply one command; `None` stands for input that ran out
    pub fn step(&mut self, command: Option<Command>) -> Vec<SessionEvent> {
        let mut events = self.begin();
        let SessionState::AtRoom(room) = self.state else {
            return events;
        };

        match command {
            Some(Command::Go(direction)) => match room.navigate(direction) {
                Some(next) => {
                    debug!(from = %room.name, to = %next.name, %direction, "moved");
                    self.moves += 1;
                    self.state = SessionState::AtRoom(next);
                    events.extend(self.arrive(next));
                }
                None => {
                    debug!(room = %room.name, %direction, "no room in that direction");
                    events.push(SessionEvent::NoRoom {
                        room: room.name.clone(),
                        direction,
                    });
                }
            },
            Some(Command::Stop) => events.push(self.stop(Ending::Stopped)),
            // TODO: decide whether an unknown key should re-prompt instead of ending the run
            Some(Command::Invalid(key)) => {
                warn!(?key, "unrecognised key, ending the investigation");
                events.push(self.stop(Ending::InvalidInput(key)));
            }
            None => events.push(self.stop(Ending::InputExhausted)),
        }
        events
    }

    /// Drive the session until it stops
    pub fn run<S: CommandSource + ?Sized>(&mut self, source: &mut S) -> SessionSummary {
        let span = info_span!("investigation", session = %self.id);
        let _guard = span.enter();

        for event in self.begin() {
            source.observe(&event);
        }
        while let SessionState::AtRoom(room) = self.state {
            let command = source.next_command(room);
            for event in self.step(command) {
                source.observe(&event);
            }
        }

        let summary = self.summary();
        info!(
            ending = ?summary.ending,
            moves = summary.moves,
            clues = summary.clues_indexed,
            "investigation over"
        );
        summary
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            ending: self.ending,
            moves: self.moves,
            arrivals: self.arrivals,
            clues_indexed: self.clues.len(),
        }
    }

    /// Hand back the evidence, e.g. to resume in a new session
    pub fn into_parts(self) -> (ClueIndex, SuspectRegistry) {
        (self.clues, self.suspects)
    }

    fn stop(&mut self, ending: Ending) -> SessionEvent {
        self.state = SessionState::Stopped;
        self.ending = Some(ending);
        SessionEvent::Ended(ending)
    }

    fn arrive(&mut self, room: &'m Room) -> Vec<SessionEvent> {
        self.arrivals += 1;
        let mut events = vec![SessionEvent::Entered {
            room: room.name.clone(),
        }];

        if let Some(clue) = room.clue.as_deref() {
            let suspect = suspect_for(&room.name);
            let new_to_index = self.clues.insert(clue);
            self.suspects.attribute(suspect, clue);
            info!(room = %room.name, suspect, new_to_index, "clue found");

            self.journal.push(Discovery {
                room: room.name.clone(),
                clue: clue.to_string(),
                suspect: suspect.to_string(),
                new_to_index,
                found_at: Utc::now(),
            });
            events.push(SessionEvent::ClueFound {
                room: room.name.clone(),
                clue: clue.to_string(),
                suspect: suspect.to_string(),
                new_to_index,
            });
        }
        events
    }
}
