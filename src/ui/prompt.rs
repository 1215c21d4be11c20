//! Reading the two interactive answers.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

pub const TEMPERATURE_PROMPT: &str = "Enter temperature: ";
pub const UNIT_PROMPT: &str = "Enter unit (C/F): ";

/// Somewhere answers to prompts come from.
pub trait InputSource {
    /// Shows `prompt` and returns the next answer token.
    fn ask(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String>;
}

/// Whitespace-delimited token reader: answers may share a line or span several.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            // Bytes, not `read_line`: undecodable input is a bad answer, not an I/O error.
            let mut line = Vec::new();
            let n = self
                .reader
                .read_until(b'\n', &mut line)
                .context("Failed to read from standard input")?;
            if n == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
        Ok(self.pending.pop_front())
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn ask(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String> {
        write!(out, "{prompt}")?;
        out.flush()?;
        match self.next_token()? {
            Some(token) => Ok(token),
            None => bail!("Unexpected end of input at prompt '{}'", prompt.trim_end()),
        }
    }
}

/// Terminal prompts rendered by `inquire`.
#[cfg(feature = "interactive")]
pub struct InquireSource;

#[cfg(feature = "interactive")]
impl InputSource for InquireSource {
    fn ask(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<String> {
        let answer = inquire::Text::new(prompt.trim_end())
            .prompt()
            .context("Prompt was cancelled")?;
        Ok(answer.trim().to_string())
    }
}

/// Picks `inquire` for a terminal when available, plain stdin otherwise.
pub fn stdin_source() -> Box<dyn InputSource> {
    #[cfg(feature = "interactive")]
    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        return Box::new(InquireSource);
    }
    Box::new(TokenReader::new(std::io::stdin().lock()))
}
