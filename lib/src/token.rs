use crate::error::ParseError;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Comment,
    String,
    Number,
    Keyword,
    Identifier,
    /// An identifier immediately followed by `(`.
    CallTarget,
    Punctuation,
    Whitespace,
    Text,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::CallTarget,
        TokenKind::Punctuation,
        TokenKind::Whitespace,
        TokenKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::CallTarget => "call_target",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("token kind", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Byte range of `value` in the tokenized input.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str, start: usize) -> Self {
        Self {
            kind,
            value: value.to_string(),
            span: start..start + value.len(),
        }
    }
}
