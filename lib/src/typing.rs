//! Frames of a typing animation: the source revealed one character at a
//! time, each prefix tokenized on its own.

use crate::language::LexerConfig;
use crate::token::Token;
use crate::tokenize::tokenize_with;
use std::str::CharIndices;
use std::time::Duration;

/// Per-character delay of the showcase card.
pub const SHOWCASE_DELAY: Duration = Duration::from_millis(50);
/// Per-character delay of the landing page editor.
pub const LANDING_DELAY: Duration = Duration::from_millis(18);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl Frame<'_> {
    pub fn tokens(&self, config: &LexerConfig) -> Vec<Token> {
        tokenize_with(self.text, config)
    }
}

pub struct Typewriter<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    index: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            index: 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.source.chars().count()
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Frame<'a>> {
        let (start, ch) = self.chars.next()?;
        let frame = Frame {
            index: self.index,
            text: &self.source[..start + ch.len_utf8()],
        };
        self.index += 1;
        Some(frame)
    }
}
