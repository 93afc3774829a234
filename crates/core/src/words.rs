//! Word sources: a lazy, finite, non-restartable stream of target words.
//!
//! Exhaustion is `Ok(None)`. An empty line is a valid (empty) word, which is
//! distinct from running out.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::GameError;

pub trait WordSource {
    /// Block until the next word is available.
    fn next_word(&mut self) -> Result<Option<String>, GameError>;
}

/// One word per line of a text stream.
#[derive(Debug)]
pub struct LineWords<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineWords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::with_capacity(64),
        }
    }
}

impl<R: BufRead> WordSource for LineWords<R> {
    fn next_word(&mut self) -> Result<Option<String>, GameError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let word = self
            .buf
            .strip_suffix('\n')
            .map(|w| w.strip_suffix('\r').unwrap_or(w))
            .unwrap_or(&self.buf);
        Ok(Some(word.to_string()))
    }
}

/// In-memory word list, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWords {
    words: VecDeque<String>,
}

impl ListWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for ListWords {
    fn next_word(&mut self) -> Result<Option<String>, GameError> {
        Ok(self.words.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain(src: &mut impl WordSource) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(w) = src.next_word().unwrap() {
            out.push(w);
        }
        out
    }

    #[test]
    fn line_words_split_on_newlines() {
        let mut src = LineWords::new(Cursor::new("cat\r\ndog\n\nbird"));
        assert_eq!(drain(&mut src), vec!["cat", "dog", "", "bird"]);
        // Stays exhausted.
        assert!(src.next_word().unwrap().is_none());
    }

    #[test]
    fn empty_stream_is_exhausted_immediately() {
        let mut src = LineWords::new(Cursor::new(""));
        assert!(src.next_word().unwrap().is_none());
    }

    #[test]
    fn list_words_consume_in_order() {
        let mut src = ListWords::new(["a", "b"]);
        assert_eq!(src.remaining(), 2);
        assert_eq!(drain(&mut src), vec!["a", "b"]);
    }
}
