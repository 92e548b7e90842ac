//! Position-tracked access to a sequence of lines, one token per line.

use crate::error::{DecodeError, ValueError};

/// A cursor over the lines of one input.
///
/// Every consume advances by exactly one line (or `n` lines for
/// [`consume_n`](Self::consume_n)). Errors carry the input name and the
/// 1-based line number they refer to.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    input: String,
    lines: Vec<String>,
    pos: usize,
}

impl TokenCursor {
    pub fn new<I, S>(input: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenCursor {
            input: input.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }

    /// Display name of the underlying input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of lines consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Consume the next line verbatim.
    pub fn consume_raw(&mut self) -> Result<String, DecodeError> {
        match self.lines.get_mut(self.pos) {
            Some(line) => {
                let line = std::mem::take(line);
                self.pos += 1;
                Ok(line)
            }
            None => Err(DecodeError::Exhausted {
                input: self.input.clone(),
                after_line: self.pos,
            }),
        }
    }

    /// Consume the next line as a non-negative decimal count.
    pub fn consume_int(&mut self) -> Result<usize, DecodeError> {
        let text = self.consume_raw()?;
        parse_count(&text).ok_or_else(|| DecodeError::MalformedInteger {
            input: self.input.clone(),
            line: self.pos,
            text,
        })
    }

    /// Consume the next line and hand it to `parse`. A [`ValueError`] is
    /// converted into a [`DecodeError`] pointing at the consumed line.
    pub fn consume_typed<T>(
        &mut self,
        parse: impl FnOnce(String) -> Result<T, ValueError>,
    ) -> Result<T, DecodeError> {
        let text = self.consume_raw()?;
        parse(text).map_err(|e| self.at_current_line(e))
    }

    /// Consume exactly `n` lines through `parse`, in order.
    pub fn consume_n<T>(
        &mut self,
        n: usize,
        mut parse: impl FnMut(String) -> Result<T, ValueError>,
    ) -> Result<Vec<T>, DecodeError> {
        // Counts come from the input; don't trust them for allocation.
        let mut values = Vec::with_capacity(n.min(self.remaining()));
        for _ in 0..n {
            values.push(self.consume_typed(&mut parse)?);
        }
        Ok(values)
    }

    /// Consume a count line followed by that many values.
    pub fn consume_counted<T>(
        &mut self,
        parse: impl FnMut(String) -> Result<T, ValueError>,
    ) -> Result<Vec<T>, DecodeError> {
        let count = self.consume_int()?;
        self.consume_n(count, parse)
    }

    fn at_current_line(&self, err: ValueError) -> DecodeError {
        match err {
            ValueError::UnknownTarget { id, context } => DecodeError::UnknownTarget {
                input: self.input.clone(),
                line: self.pos,
                id,
                context,
            },
            ValueError::Invalid(message) => DecodeError::InvalidValue {
                input: self.input.clone(),
                line: self.pos,
                message,
            },
        }
    }
}

/// ASCII digits only: no sign, no surrounding whitespace.
fn parse_count(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
