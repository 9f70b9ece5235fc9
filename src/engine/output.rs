use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum OutputBlock {
    Text(String),
    Room(String),
    Blank,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    /// A room's long description.
    pub fn room(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Room(s.into()));
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Printed lines, one per block (room descriptions span several).
    pub fn lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Text(s) | OutputBlock::Room(s) => s.clone(),
                OutputBlock::Blank => String::new(),
            })
            .collect()
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    }
}
