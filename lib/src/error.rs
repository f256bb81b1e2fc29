#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordError {
    pub word: String,
}
impl KeywordError {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
        }
    }
}
impl std::fmt::Display for KeywordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid keyword {:?}: keywords must match [A-Za-z_][A-Za-z0-9_]*",
            self.word
        )
    }
}
impl std::error::Error for KeywordError {}

/// Returned when a language, theme or token kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub what: &'static str,
    pub input: String,
}
impl ParseError {
    pub fn new(what: &'static str, input: &str) -> Self {
        Self {
            what,
            input: input.to_string(),
        }
    }
}
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {}: {}", self.what, self.input)
    }
}
impl std::error::Error for ParseError {}
