use tracing::debug;

use crate::engine::command::Command;
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world::{RoomId, World};

/// `go <direction>`. Moves only when the current room has that exact exit;
/// otherwise `current_room` is left alone.
pub fn handle_go(out: &mut Output, current_room: &mut RoomId, world: &World, command: &Command) {
    let Some(direction) = command.second_word() else {
        out.say("Go where?");
        return;
    };

    match world.room(*current_room).exit(direction) {
        Some(next) => {
            debug!(
                from = world.room_key(*current_room).unwrap_or("?"),
                to = world.room_key(next).unwrap_or("?"),
                direction,
                "moved"
            );
            *current_room = next;
            render_room(out, world, next);
        }
        None => out.say("There is no door!"),
    }
}
