use std::collections::HashSet;
use std::fmt;

use super::loader::WorldFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Structural checks on a parsed definition. An empty result means the
/// definition can be wired into a world without dangling links.
pub(super) fn validate_world(world: &WorldFile) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.world.id.trim().is_empty() {
        errors.push(ValidationError::new("world.id may not be empty"));
    }

    if world.world.name.trim().is_empty() {
        errors.push(ValidationError::new("world.name may not be empty"));
    }

    // Rooms must not be empty
    if world.room.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    let mut room_ids: HashSet<&str> = HashSet::new();
    for room in &world.room {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room id '{}'",
                room.id
            )));
        }
    }

    // start_room must exist
    if !room_ids.contains(world.world.start_room.as_str()) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.world.start_room
        )));
    }

    // Validate exits
    for room in &world.room {
        for exit in &room.exit {
            if !room_ids.contains(exit.target.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room.id, exit.direction, exit.target
                )));
            }
        }
    }

    errors
}
