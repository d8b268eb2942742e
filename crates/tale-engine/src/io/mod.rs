//! The two collaborators the engine talks to: a display surface for text
//! and a source of player input lines.

mod console;
mod transcript;

use std::io;

pub use console::{Console, DEFAULT_TYPE_DELAY, StdinSource};
pub use transcript::{ScriptedInput, Transcript};

/// Width of the banner drawn by [`DisplaySurface::header`].
pub const HEADER_WIDTH: usize = 60;

/// Where game text goes.
pub trait DisplaySurface {
    /// Print one line of text.
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Print narration. Surfaces may pace this (typewriter effect).
    fn narrate(&mut self, text: &str) -> io::Result<()> {
        self.line(text)
    }

    /// Print a prompt without a trailing newline.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Clear the screen and draw a title banner.
    fn header(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        self.clear()?;
        self.line(&rule)?;
        self.line(&format!("{title:^width$}", width = HEADER_WIDTH))?;
        self.line(&rule)?;
        self.line("")
    }
}

/// Where player input comes from.
pub trait LineSource {
    /// Block until a line is available. `None` means the input has ended.
    ///
    /// The returned line has its line terminator removed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
