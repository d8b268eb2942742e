//! In-memory display and input, for tests and scripted replays.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use super::{DisplaySurface, LineSource};

/// A display surface that records every line.
///
/// Clones share the same buffer, so a test can hand one clone to the game
/// and keep another to inspect what was shown.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// The recorded lines joined by newlines.
    pub fn text(&self) -> String {
        self.lines.borrow().join("\n")
    }

    /// Whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    /// Number of recorded lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|l| l.contains(needle))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn reset(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl DisplaySurface for Transcript {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A line source fed from a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Queue the given lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
