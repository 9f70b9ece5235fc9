mod actions;
mod command;
mod movement;
mod output;
mod parser;
mod render;

pub use actions::{handle_eat, handle_help, handle_quit};
pub use command::{Command, CommandWord};
pub use movement::handle_go;
pub use output::{Output, OutputBlock};
pub use parser::Parser;
pub use render::render_room;
