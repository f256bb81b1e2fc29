use crate::{
    language::LexerConfig,
    token::{Token, TokenKind},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_CONFIG: LexerConfig = LexerConfig::default();
    static ref COMMENT_BODY: Regex = Regex::new(r"^[^\r\n]*").unwrap();
    // An unterminated literal runs to the end of input, a lone trailing
    // backslash included.
    static ref TOKEN_PATTERNS: Vec<(Regex, TokenKind)> = vec![
        (
            Regex::new(r#"^"(?:[^"\\]|\\(?s:.))*(?:"|\\?\z)"#).unwrap(),
            TokenKind::String
        ),
        (
            Regex::new(r#"^'(?:[^'\\]|\\(?s:.))*(?:'|\\?\z)"#).unwrap(),
            TokenKind::String
        ),
        (Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap(), TokenKind::Number),
        (
            Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(),
            TokenKind::Identifier
        ),
        (Regex::new(r"^[{}()\[\];,.`]").unwrap(), TokenKind::Punctuation),
        (Regex::new(r"^[ \t\r\n]+").unwrap(), TokenKind::Whitespace),
    ];
}

/// Tokenizes `input` with the default (Python) profile.
///
/// Never fails: malformed input, such as a prefix cut in the middle of a
/// string literal, still yields tokens whose values concatenate back to
/// `input`.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, &DEFAULT_CONFIG)
}

pub fn tokenize_with(input: &str, config: &LexerConfig) -> Vec<Token> {
    Lexer::new(input, config).collect()
}

/// Streaming form of [`tokenize_with`].
pub struct Lexer<'a> {
    config: &'a LexerConfig,
    remaining: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            config,
            remaining: input,
            position: 0,
        }
    }

    /// Kind and byte length of the token at the front of `remaining`.
    /// The length is never zero while input remains.
    fn scan_token(&self) -> (TokenKind, usize) {
        let rest = self.remaining;

        if let Some(marker) = self.config.comment_marker_at(rest) {
            let body = COMMENT_BODY
                .find(&rest[marker.len()..])
                .map_or(0, |m| m.end());
            return (TokenKind::Comment, marker.len() + body);
        }

        // Every pattern is `^`-anchored, so a match always starts at 0.
        for (pattern, kind) in TOKEN_PATTERNS.iter() {
            if let Some(mat) = pattern.find(rest) {
                if mat.end() > 0 {
                    let len = mat.end();
                    let kind = match kind {
                        TokenKind::Identifier => self.classify_word(mat.as_str(), &rest[len..]),
                        other => *other,
                    };
                    return (kind, len);
                }
            }
        }

        let len = rest.chars().next().map_or(0, char::len_utf8);
        (TokenKind::Text, len)
    }

    fn classify_word(&self, word: &str, after: &str) -> TokenKind {
        if self.config.keywords().contains(word) {
            TokenKind::Keyword
        } else if after.starts_with('(') {
            TokenKind::CallTarget
        } else {
            TokenKind::Identifier
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.remaining.is_empty() {
            return None;
        }
        let (kind, len) = self.scan_token();
        let token = Token::new(kind, &self.remaining[..len], self.position);
        self.position += len;
        self.remaining = &self.remaining[len..];
        Some(token)
    }
}
