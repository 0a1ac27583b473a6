//! Whitespace-separated integer tokens
//!
//! Lines are pulled from the reader only when the pending tokens run out, so
//! prompts written between reads line up with interactive input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// One value read from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A token that parsed completely as `i32`
    Value(i32),
    /// A token that is not a valid `i32` (bad characters or out of range)
    Malformed(String),
    /// Input exhausted
    End,
}

/// Reads integer tokens from any buffered reader.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, or `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so it surfaces as a
    /// malformed value instead of an I/O failure.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    /// Next token interpreted as an `i32`.
    pub fn next_value(&mut self) -> io::Result<Token> {
        Ok(match self.next_token()? {
            None => Token::End,
            Some(raw) => match raw.parse::<i32>() {
                Ok(value) => Token::Value(value),
                Err(_) => Token::Malformed(raw),
            },
        })
    }
}
