use std::fmt;

/// The closed set of words a command can start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Go,
    Look,
    Eat,
    Help,
    Quit,
    Unknown,
}

impl CommandWord {
    /// Recognised words, in the order `help` lists them.
    pub const VOCABULARY: [CommandWord; 5] = [
        CommandWord::Go,
        CommandWord::Look,
        CommandWord::Eat,
        CommandWord::Help,
        CommandWord::Quit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Go => "go",
            CommandWord::Look => "look",
            CommandWord::Eat => "eat",
            CommandWord::Help => "help",
            CommandWord::Quit => "quit",
            CommandWord::Unknown => "?",
        }
    }

    /// Exact, case-sensitive lookup; anything else is `Unknown`.
    pub fn from_word(word: &str) -> CommandWord {
        Self::VOCABULARY
            .into_iter()
            .find(|w| w.as_str() == word)
            .unwrap_or(CommandWord::Unknown)
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    word: CommandWord,
    second_word: Option<String>,
}

impl Command {
    pub fn new(word: CommandWord, second_word: Option<String>) -> Self {
        Command { word, second_word }
    }

    pub fn word(&self) -> CommandWord {
        self.word
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second_word.as_deref()
    }
}
