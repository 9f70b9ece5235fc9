use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

// Game structs and enums

/// Handle to a room inside a [`World`]. Only the world hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    rooms: Vec<Room>,
    keys: HashMap<String, RoomId>,
    start_room: RoomId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    description: String,
    item: Option<Item>,
    exits: Vec<Exit>, // insertion order is the listing order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: RoomId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    description: String,
    weight: Weight,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Weight::Light => "light",
            Weight::Medium => "medium",
            Weight::Heavy => "heavy",
        };
        f.write_str(s)
    }
}

impl Item {
    pub fn new(description: impl Into<String>, weight: Weight) -> Self {
        Item {
            description: description.into(),
            weight,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Text appended to a room description; empty for an item with no description.
    pub fn item_info(&self) -> String {
        if self.description.is_empty() {
            return String::new();
        }
        format!(" there is {}, weight = {}", self.description, self.weight)
    }
}

impl Room {
    pub fn new(description: impl Into<String>, item: Option<Item>) -> Self {
        Room {
            description: description.into(),
            item,
            exits: Vec::new(),
        }
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Link `direction` to `target`. Re-linking a direction replaces the target
    /// but keeps its place in the exit listing.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: RoomId) {
        let direction = direction.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn exit_string(&self) -> String {
        let mut s = String::from("Exits:");
        for exit in &self.exits {
            s.push(' ');
            s.push_str(&exit.direction);
        }
        s
    }

    pub fn long_description(&self) -> String {
        let item_info = self.item.as_ref().map(Item::item_info).unwrap_or_default();
        format!(
            "You are {}.{}\n{}",
            self.description,
            item_info,
            self.exit_string()
        )
    }
}

impl World {
    /// An empty world. The start room defaults to the first room added.
    pub(crate) fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        World {
            id: id.into(),
            name: name.into(),
            rooms: Vec::new(),
            keys: HashMap::new(),
            start_room: RoomId(0),
        }
    }

    /// Callers check `key` for duplicates first.
    pub(crate) fn add_room(&mut self, key: impl Into<String>, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(room);
        self.keys.insert(key.into(), id);
        id
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub(crate) fn set_start_room(&mut self, id: RoomId) {
        self.start_room = id;
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_id(&self, key: &str) -> Option<RoomId> {
        self.keys.get(key).copied()
    }

    pub fn room_key(&self, id: RoomId) -> Option<&str> {
        self.keys
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    pub fn start_room(&self) -> RoomId {
        self.start_room
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
