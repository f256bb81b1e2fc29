use crate::error::ParseError;
use crate::keywords::KeywordSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Python,
    CLike,
    /// Python keywords, with both `#` and `//` starting comments.
    Mixed,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::CLike, Language::Mixed];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::CLike => "c-like",
            Language::Mixed => "mixed",
        }
    }

    pub fn config(&self) -> LexerConfig {
        match self {
            Language::Python => LexerConfig::python(),
            Language::CLike => LexerConfig::c_like(),
            Language::Mixed => LexerConfig::mixed(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "c-like" | "clike" | "c" | "js" | "javascript" => Ok(Language::CLike),
            "mixed" => Ok(Language::Mixed),
            _ => Err(ParseError::new("language", s)),
        }
    }
}

/// Everything the scanner needs to know about a source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    keywords: KeywordSet,
    line_comments: Vec<String>,
}

impl LexerConfig {
    /// Empty comment markers are dropped: they would match at every position.
    pub fn new<I, S>(keywords: KeywordSet, line_comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords,
            line_comments: line_comments
                .into_iter()
                .map(Into::into)
                .filter(|marker: &String| !marker.is_empty())
                .collect(),
        }
    }

    pub fn python() -> Self {
        Self::new(KeywordSet::python(), ["#"])
    }

    pub fn c_like() -> Self {
        Self::new(KeywordSet::c_like(), ["//"])
    }

    pub fn mixed() -> Self {
        Self::new(KeywordSet::python(), ["#", "//"])
    }

    /// Replaces the keyword set, keeping the comment markers.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    pub(crate) fn comment_marker_at(&self, rest: &str) -> Option<&str> {
        self.line_comments
            .iter()
            .map(String::as_str)
            .find(|marker| rest.starts_with(marker))
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::python()
    }
}
