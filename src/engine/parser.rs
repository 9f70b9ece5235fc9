use std::io::{self, BufRead};

use super::command::{Command, CommandWord};

/// Turns input lines into [`Command`]s.
///
/// Only the first two words of a line matter: the first picks the command,
/// the second is kept verbatim. Anything after that is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    pub fn parse(&self, line: &str) -> Command {
        let mut words = line.split_whitespace();
        let word = words
            .next()
            .map(CommandWord::from_word)
            .unwrap_or(CommandWord::Unknown);
        let second_word = words.next().map(str::to_string);
        Command::new(word, second_word)
    }

    /// Reads one line and parses it. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line still
    /// parses instead of failing the read.
    pub fn read_command<R: BufRead>(&self, reader: &mut R) -> io::Result<Option<Command>> {
        let mut input = Vec::new();
        let bytes_read = reader.read_until(b'\n', &mut input)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(self.parse(&String::from_utf8_lossy(&input))))
    }

    /// All valid command words, space separated.
    pub fn show_commands(&self) -> String {
        CommandWord::VOCABULARY
            .iter()
            .map(|w| w.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
