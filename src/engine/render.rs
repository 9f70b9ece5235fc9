use crate::engine::output::Output;
use crate::world::{RoomId, World};

pub fn render_room(out: &mut Output, world: &World, room: RoomId) {
    out.room(world.room(room).long_description());
}
