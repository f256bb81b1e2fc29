use crate::error::KeywordError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

pub const PYTHON_KEYWORDS: &[&str] = &[
    "import", "from", "def", "class", "return", "if", "else", "elif", "for", "while", "try",
    "except", "with", "as", "in", "and", "or", "not", "True", "False", "None", "break",
    "continue", "pass", "lambda", "async", "await",
];

/// Words highlighted as keywords whatever the source language.
pub const CROSS_LANGUAGE_KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "export", "default", "async", "await", "public",
    "private", "static",
];

pub const C_LIKE_KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "export", "default", "async", "await", "public",
    "private", "static", "import", "from", "class", "return", "if", "else", "for", "while",
    "do", "switch", "case", "break", "continue", "new", "try", "catch", "finally", "throw",
    "typeof", "instanceof", "in", "of", "true", "false", "null", "undefined", "this", "void",
];

lazy_static! {
    static ref KEYWORD_REGEX: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// An immutable set of words the lexer classifies as keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl KeywordSet {
    /// Builds a set from user-provided words. Every word must be a complete
    /// identifier run, otherwise the lexer could never match it.
    pub fn from_words<I, S>(words: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !KEYWORD_REGEX.is_match(word) {
                return Err(KeywordError::new(word));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub(crate) fn from_lists(lists: &[&[&'static str]]) -> Self {
        Self {
            words: lists
                .iter()
                .flat_map(|list| list.iter())
                .map(|word| word.to_string())
                .collect(),
        }
    }

    pub fn python() -> Self {
        Self::from_lists(&[PYTHON_KEYWORDS, CROSS_LANGUAGE_KEYWORDS])
    }

    pub fn c_like() -> Self {
        Self::from_lists(&[C_LIKE_KEYWORDS])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
