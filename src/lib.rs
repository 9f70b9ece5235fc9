pub mod engine;
pub mod error;
pub mod world;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use engine::{
    Command, CommandWord, Output, Parser, handle_eat, handle_go, handle_help, handle_quit,
    render_room,
};
use world::{RoomId, World};

pub use error::WorldError;
pub use world::{campus_world, load_world_from_str};

pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

/// One play session: the world, the parser, and where the player stands.
pub struct Game {
    world: World,
    parser: Parser,
    current_room: RoomId,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game on the campus map. Call `init()` to get the welcome banner.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let game = Game::campus().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame { game })
        }

        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.game.welcome().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.game.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    pub fn new(world: World) -> Self {
        let current_room = world.start_room();
        Game {
            world,
            parser: Parser::new(),
            current_room,
        }
    }

    /// A fresh game on the built-in campus map, starting outside.
    pub fn campus() -> Result<Self, WorldError> {
        Ok(Game::new(campus_world()?))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn welcome(&self) -> Output {
        let mut out = Output::new();
        out.blank();
        out.say(format!("Welcome to the {}!", self.world.name));
        out.say(format!(
            "{} is a new, incredibly boring adventure game.",
            self.world.name
        ));
        out.say(format!("Type '{}' if you need help.", CommandWord::Help));
        out.blank();
        render_room(&mut out, &self.world, self.current_room);
        out
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let command = self.parser.parse(input);
        self.process_command(&command)
    }

    pub fn process_command(&mut self, command: &Command) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;

        debug!(
            word = %command.word(),
            second = command.second_word().unwrap_or(""),
            "command"
        );

        match command.word() {
            CommandWord::Unknown => out.say("I don't know what you mean..."),
            CommandWord::Help => handle_help(&mut out, &self.parser),
            CommandWord::Go => handle_go(&mut out, &mut self.current_room, &self.world, command),
            CommandWord::Look => render_room(&mut out, &self.world, self.current_room),
            CommandWord::Eat => handle_eat(&mut out),
            CommandWord::Quit => {
                quit = handle_quit(&mut out, command);
                if quit {
                    out.say(FAREWELL);
                }
            }
        }

        (out, quit)
    }

    /// Runs the prompt loop until `quit` or end of input.
    pub fn play<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        info!(world = %self.world.id, "game started");
        self.welcome().write_to(output)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(command) = self.parser.read_command(&mut input)? else {
                // Input closed without a quit.
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                break;
            };

            let (out, quit) = self.process_command(&command);
            out.write_to(output)?;

            if quit {
                break;
            }
        }

        info!("game ended");
        Ok(())
    }
}
