//! Line-oriented prompt input.
//!
//! Every read consumes a whole line, so whatever a user types after the
//! first token is discarded and the next prompt starts clean.

use std::io::BufRead;

use crate::error::Result;

/// Answer to a numeric prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The first token parsed as an unsigned integer.
    Number(u32),
    /// The first token was not a number; carries the raw token.
    Other(String),
}

impl Choice {
    /// Parse the first whitespace-separated token of a line.
    ///
    /// Returns `None` for a blank line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.split_whitespace().next()?;
        Some(
            token
                .parse()
                .map_or_else(|_| Self::Other(token.to_string()), Self::Number),
        )
    }

    /// The number, if the answer was numeric.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(_) => None,
        }
    }
}

/// Reads answers from a buffered input stream.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Read one raw line with its terminator (`\n` or `\r\n`) stripped.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing, so a
    /// malformed line is just another answer that matches nothing.
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let bytes = self.buf.strip_suffix(b"\n").map_or(self.buf.as_slice(), |l| {
            l.strip_suffix(b"\r").unwrap_or(l)
        });
        Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Read the next non-blank line as a [`Choice`].
    ///
    /// Blank lines are skipped. Returns `Ok(None)` at end of input.
    pub fn read_choice(&mut self) -> Result<Option<Choice>> {
        while let Some(line) = self.read_line()? {
            if let Some(choice) = Choice::parse(&line) {
                return Ok(Some(choice));
            }
        }
        Ok(None)
    }
}
