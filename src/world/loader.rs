use serde::Deserialize;
use std::collections::HashMap;

use tracing::debug;

use super::model::{Item, Room, RoomId, Weight, World};
use super::validator::validate_world;
use crate::error::WorldError;

/// The campus map the game ships with.
const CAMPUS_TOML: &str = include_str!("../../worlds/campus.toml");

// TOML structs

#[derive(Deserialize)]
pub(super) struct WorldFile {
    pub(super) world: WorldHeader,
    #[serde(default)]
    pub(super) room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
pub(super) struct WorldHeader {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) start_room: String,
}

#[derive(Deserialize)]
pub(super) struct RoomConfig {
    pub(super) id: String,
    #[serde(default)]
    pub(super) desc: String,

    #[serde(default)]
    pub(super) item: Option<ItemConfig>,

    #[serde(default)]
    pub(super) exit: Vec<ExitConfig>, // order here is the exit listing order
}

#[derive(Deserialize)]
pub(super) struct ItemConfig {
    #[serde(default)]
    pub(super) description: String,
    pub(super) weight: Weight,
}

#[derive(Deserialize)]
pub(super) struct ExitConfig {
    pub(super) direction: String,
    pub(super) target: String,
}

// TOML parser functions

/// The built-in campus world.
pub fn campus_world() -> Result<World, WorldError> {
    load_world_from_str(CAMPUS_TOML)
}

/// Public API: load a world from TOML text.
///
/// Rooms are created first, then exits are wired in definition order, so
/// exits may point forward to rooms defined later in the file.
pub fn load_world_from_str(src: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(src)?;

    let errors = validate_world(&world_file);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    let mut world = World::new(world_file.world.id, world_file.world.name);

    // Pass 1: rooms
    let mut ids: HashMap<String, RoomId> = HashMap::new();
    for room_cfg in &world_file.room {
        let item = room_cfg
            .item
            .as_ref()
            .map(|i| Item::new(i.description.clone(), i.weight));
        let id = world.add_room(room_cfg.id.clone(), Room::new(room_cfg.desc.clone(), item));
        ids.insert(room_cfg.id.clone(), id);
    }

    // Pass 2: exits. Every key was checked by validate_world.
    for room_cfg in world_file.room {
        let from = ids[&room_cfg.id];
        for exit in room_cfg.exit {
            let to = ids[&exit.target];
            world.room_mut(from).set_exit(exit.direction, to);
        }
    }

    world.set_start_room(ids[&world_file.world.start_room]);

    debug!(
        world = %world.id,
        rooms = world.len(),
        "world loaded"
    );

    Ok(world)
}
