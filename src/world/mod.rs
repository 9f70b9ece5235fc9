mod loader;
mod model;
mod validator;

pub use loader::{campus_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Exit, Item, Room, RoomId, Weight, World};
pub use validator::ValidationError;
