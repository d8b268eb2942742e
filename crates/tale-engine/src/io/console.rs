//! Terminal-backed display and input.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use super::{DisplaySurface, HEADER_WIDTH, LineSource};

/// Default pause between narrated characters.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(30);

/// Standard output with a typewriter effect for narration.
#[derive(Debug, Clone)]
pub struct Console {
    delay: Duration,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            delay: DEFAULT_TYPE_DELAY,
        }
    }
}

impl Console {
    /// Console with the default typewriter delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause between narrated characters. Zero prints instantly.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The pause between narrated characters.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl DisplaySurface for Console {
    fn line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
    }

    fn narrate(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.line(text);
        }
        let mut out = io::stdout().lock();
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(out)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{text}")?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        let centered = format!("{title:^width$}", width = HEADER_WIDTH);
        self.clear()?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", rule.dimmed())?;
        writeln!(out, "{}", centered.bold().cyan())?;
        writeln!(out, "{}", rule.dimmed())?;
        writeln!(out)
    }
}

/// Lines from standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    /// Read from the process's standard input.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut io::stdin().lock())
    }
}

/// Read one line, replacing bytes that are not UTF-8 instead of failing.
fn read_lossy_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_lose_their_terminator() {
        let mut input: &[u8] = b"north\r\nsouth\n";
        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("north"));
        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("south"));
        assert_eq!(read_lossy_line(&mut input).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut input: &[u8] = b"caf\xe9\n";
        assert_eq!(
            read_lossy_line(&mut input).unwrap().as_deref(),
            Some("caf\u{FFFD}")
        );
    }

    #[test]
    fn last_line_without_newline() {
        let mut input: &[u8] = b"quit";
        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("quit"));
    }
}
