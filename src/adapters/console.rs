use crate::domain::ports::TokenSource;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Splits a line-oriented reader into whitespace-delimited tokens.
///
/// Tokens may share a line or be spread over several lines. The reader is
/// owned for the lifetime of the `TokenReader` and released when it drops.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    fn fill(&mut self) -> Result<()> {
        let mut line = String::new();
        while self.pending.is_empty() && !self.exhausted {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                self.exhausted = true;
                break;
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(())
    }
}

impl<R: BufRead> TokenSource for TokenReader<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        self.fill()?;
        let token = self.pending.pop_front();
        tracing::trace!(?token, "read token");
        Ok(token)
    }
}

impl<R: BufRead> Drop for TokenReader<R> {
    fn drop(&mut self) {
        tracing::debug!("input stream released");
    }
}
