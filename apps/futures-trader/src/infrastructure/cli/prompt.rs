//! Line-oriented prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reads one trimmed line per question.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a prompter.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read the answer.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Everything written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_answer_and_shows_label() {
        let mut p = prompter("  btcusdt \r\n");
        assert_eq!(p.ask("Symbol: ").unwrap().as_deref(), Some("btcusdt"));
        assert_eq!(String::from_utf8_lossy(p.output()), "Symbol: ");
    }

    #[test]
    fn ask_returns_none_at_eof() {
        let mut p = prompter("only\n");
        assert!(p.ask("a: ").unwrap().is_some());
        assert!(p.ask("b: ").unwrap().is_none());
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("x: ").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn say_appends_newline() {
        let mut p = prompter("");
        p.say("hello").unwrap();
        assert_eq!(String::from_utf8_lossy(p.output()), "hello\n");
    }
}
