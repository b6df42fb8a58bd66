//! The mansion map
//!
//! A fixed binary tree of rooms. Every room can hold one clue and has at most
//! one exit to the left and one to the right.

use super::Direction;
use crate::InvestigationError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A room in the mansion
#[derive(Debug)]
pub struct Room {
    pub name: String,
    pub clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.filter(|c| !c.is_empty()).map(String::from),
            left: None,
            right: None,
        }
    }

    /// The room through the exit in `direction`, if there is one
    pub fn navigate(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<Box<Room>> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Where a room goes when the map is assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub room: String,
    pub clue: Option<String>,
    /// Parent room and the exit of the parent leading here; `None` for the root
    pub under: Option<(String, Direction)>,
}

impl Placement {
    pub fn root(room: &str, clue: &str) -> Self {
        Self {
            room: room.to_string(),
            clue: Some(clue.to_string()),
            under: None,
        }
    }

    pub fn child(room: &str, clue: &str, parent: &str, side: Direction) -> Self {
        Self {
            room: room.to_string(),
            clue: Some(clue.to_string()),
            under: Some((parent.to_string(), side)),
        }
    }
}

/// An ordered list of placements describing a whole map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub placements: Vec<Placement>,
}

impl Blueprint {
    /// The layout of the mansion
    pub fn mansion() -> Self {
        use Direction::{Left, Right};

        Self {
            placements: vec![
                Placement::root("Hall de Entrada", "O porteiro viu um carro vermelho."),
                Placement::child("Biblioteca", "Um bilhete rasgado sob o sofa.", "Hall de Entrada", Left),
                Placement::child("Cozinha", "Facas organizadas, exceto uma.", "Hall de Entrada", Right),
                Placement::child("Escritorio", "O Abajur esta ligado, ha impressao digital.", "Biblioteca", Left),
                Placement::child("Quarto Principal", "Um relogio parado as 3:00.", "Biblioteca", Right),
                Placement::child("Dispensa", "A porta da dispensa foi forcada.", "Cozinha", Left),
                Placement::child("Sotao", "Um mapa incompleto do bairro.", "Cozinha", Right),
            ],
        }
    }

    pub fn with(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }
}

/// The room tree, owned from its root
#[derive(Debug)]
pub struct RoomMap {
    root: Box<Room>,
    len: usize,
}

impl RoomMap {
    /// Build the mansion
    pub fn build() -> Result<Self, InvestigationError> {
        Self::from_blueprint(&Blueprint::mansion())
    }

    /// Assemble a map, checking the blueprint describes a single tree
    pub fn from_blueprint(blueprint: &Blueprint) -> Result<Self, InvestigationError> {
        let mut names = HashSet::new();
        for placement in &blueprint.placements {
            if !names.insert(placement.room.as_str()) {
                return Err(InvestigationError::DuplicateRoom(placement.room.clone()));
            }
        }

        let mut root = None;
        let mut children: HashMap<(String, Direction), &Placement> = HashMap::new();
        for placement in &blueprint.placements {
            match &placement.under {
                None if root.is_some() => {
                    return Err(InvestigationError::ExtraRoot(placement.room.clone()));
                }
                None => root = Some(placement),
                Some((parent, side)) => {
                    if !names.contains(parent.as_str()) {
                        return Err(InvestigationError::UnknownParent {
                            room: placement.room.clone(),
                            parent: parent.clone(),
                        });
                    }
                    if children.insert((parent.clone(), *side), placement).is_some() {
                        return Err(InvestigationError::SlotTaken {
                            parent: parent.clone(),
                            side: *side,
                        });
                    }
                }
            }
        }
        let root = root.ok_or(InvestigationError::MissingRoot)?;

        let mut root = Box::new(Room::new(&root.room, root.clue.as_deref()));
        let mut len = 1;
        // Walk down from the root, attaching each room's children by name.
        let mut frontier: Vec<&mut Room> = vec![root.as_mut()];
        while let Some(room) = frontier.pop() {
            for side in [Direction::Left, Direction::Right] {
                if let Some(placement) = children.get(&(room.name.clone(), side)) {
                    *room.slot_mut(side) =
                        Some(Box::new(Room::new(&placement.room, placement.clue.as_deref())));
                    len += 1;
                }
            }
            let Room { left, right, .. } = room;
            frontier.extend(left.as_deref_mut());
            frontier.extend(right.as_deref_mut());
        }

        if len < blueprint.placements.len() {
            let map = Self { root, len };
            let placed: HashSet<&str> = map.rooms().map(|r| r.name.as_str()).collect();
            let stray = blueprint
                .placements
                .iter()
                .find(|p| !placed.contains(p.room.as_str()))
                .map(|p| p.room.clone())
                .unwrap_or_default();
            return Err(InvestigationError::Unreachable(stray));
        }

        tracing::debug!(rooms = len, root = %root.name, "map assembled");
        Ok(Self { root, len })
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rooms in pre-order: parent, left subtree, right subtree
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms {
            stack: vec![self.root()],
        }
    }

    /// Look a room up by name
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name == name)
    }

    /// Follow a path of directions from the root
    pub fn walk(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(self.root(), |room, direction| room.navigate(*direction))
    }
}

impl Drop for RoomMap {
    fn drop(&mut self) {
        // Children are released before their parent, without recursion.
        let mut stack: Vec<Box<Room>> = Vec::new();
        stack.extend(self.root.left.take());
        stack.extend(self.root.right.take());
        while let Some(mut room) = stack.pop() {
            if room.is_dead_end() {
                continue;
            }
            let left = room.left.take();
            let right = room.right.take();
            stack.push(room);
            stack.extend(left);
            stack.extend(right);
        }
    }
}

/// Pre-order iterator over the rooms of a map
pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        self.stack.extend(room.right.as_deref());
        self.stack.extend(room.left.as_deref());
        Some(room)
    }
}
