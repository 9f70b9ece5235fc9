use crate::engine::command::Command;
use crate::engine::output::Output;
use crate::engine::parser::Parser;

pub fn handle_eat(out: &mut Output) {
    out.say("You eat some food and your hunger is satisfied");
}

pub fn handle_help(out: &mut Output, parser: &Parser) {
    out.say("You are lost. You are alone. You wander");
    out.say("around at the university.");
    out.blank();
    out.say("Your command words are:");
    out.say(parser.show_commands());
}

/// Returns true when the game should end. `quit <anything>` is refused.
pub fn handle_quit(out: &mut Output, command: &Command) -> bool {
    if command.has_second_word() {
        out.say("Quit what?");
        return false;
    }
    true
}
