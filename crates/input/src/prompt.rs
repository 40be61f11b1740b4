//! Line-oriented prompter over any reader/writer pair.
//!
//! Malformed input never escapes as an error: the prompter prints a warning and
//! asks again. Only I/O failures and end of input are returned as errors.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::parse::{parse_int, parse_pair};
use crate::term::encode_notice_into;
use crate::types::COORD_LIMIT;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
    notice: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::with_capacity(64),
            notice: Vec::with_capacity(128),
        }
    }

    /// Writer shared with the renderer
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line (without the trailing newline).
    pub fn read_line(&mut self, prompt: &str) -> Result<&str> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        self.line.clear();
        let n = self
            .input
            .read_line(&mut self.line)
            .context("failed to read from console")?;
        if n == 0 {
            bail!("console input closed");
        }
        Ok(self.line.trim_end_matches(['\r', '\n']))
    }

    /// Ask until `parse` accepts the line, printing `hint` after each rejection.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let parsed = parse(self.read_line(prompt)?);
            match parsed {
                Some(value) => return Ok(value),
                None => self.warn(hint)?,
            }
        }
    }

    /// Ask for a single integer coordinate.
    pub fn ask_int(&mut self, prompt: &str) -> Result<i32> {
        let hint = format!("Please enter a whole number between -{COORD_LIMIT} and {COORD_LIMIT}.");
        self.ask(prompt, &hint, parse_int)
    }

    /// Ask for an `x,y` pair.
    pub fn ask_pair(&mut self, prompt: &str) -> Result<(i32, i32)> {
        let hint = "Please enter two whole numbers as x,y (for example 4,7).";
        self.ask(prompt, hint, parse_pair)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.notice.clear();
        encode_notice_into(message, &mut self.notice)?;
        self.output.write_all(&self.notice)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut p = prompter("hello\r\n");
        assert_eq!(p.read_line("> ").unwrap(), "hello");
        assert!(String::from_utf8(p.into_output()).unwrap().starts_with("> "));
    }

    #[test]
    fn test_read_line_at_eof_is_error() {
        let mut p = prompter("");
        assert!(p.read_line("> ").is_err());
    }

    #[test]
    fn test_ask_int_reprompts_until_valid() {
        let mut p = prompter("abc\n\n7\n");
        assert_eq!(p.ask_int("x? ").unwrap(), 7);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("x? ").count(), 3);
        assert_eq!(out.matches("Please enter a whole number").count(), 2);
    }

    #[test]
    fn test_ask_pair_reprompts_until_valid() {
        let mut p = prompter("3\n3,4\n");
        assert_eq!(p.ask_pair("xy? ").unwrap(), (3, 4));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("two whole numbers").count(), 1);
    }

    #[test]
    fn test_rejection_hint_matches_rendered_notice() {
        let mut p = prompter("x\n5\n");
        assert_eq!(p.ask_int("x? ").unwrap(), 5);

        let hint = format!("Please enter a whole number between -{COORD_LIMIT} and {COORD_LIMIT}.");
        let mut notice = Vec::new();
        encode_notice_into(&hint, &mut notice).unwrap();

        let out = p.into_output();
        assert!(out.windows(notice.len()).any(|w| w == notice.as_slice()));
    }

    #[test]
    fn test_ask_gives_up_when_input_runs_out() {
        let mut p = prompter("nope\n");
        assert!(p.ask_int("x? ").is_err());
    }
}
