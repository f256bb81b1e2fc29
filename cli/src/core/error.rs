use codeglow_lib::KeywordError;
use std::fmt;
use std::io;

/// A keyword file that is not a JSON array of strings.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordFileError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub file_path: String,
}
impl KeywordFileError {
    pub fn from_json(err: &serde_json::Error, file_path: &str) -> Self {
        let full = err.to_string();
        let position = format!(" at line {} column {}", err.line(), err.column());
        let message = full.strip_suffix(&position).unwrap_or(&full).to_string();
        Self {
            message,
            line: err.line(),
            column: err.column(),
            file_path: file_path.to_string(),
        }
    }
}
impl fmt::Display for KeywordFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid keyword file {} at line {}, column {}: {}",
            crate::core::paths::display_path(std::path::Path::new(&self.file_path)),
            self.line,
            self.column,
            self.message
        )
    }
}
impl std::error::Error for KeywordFileError {}

#[derive(Debug)]
pub enum CodeglowError {
    Io(io::Error),
    KeywordFile(KeywordFileError),
    Keyword(KeywordError),
    Generic(String),
}

impl fmt::Display for CodeglowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeglowError::Io(err) => write!(f, "IO error: {err}"),
            CodeglowError::KeywordFile(err) => write!(f, "{err}"),
            CodeglowError::Keyword(err) => write!(f, "{err}"),
            CodeglowError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CodeglowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodeglowError::Io(err) => Some(err),
            CodeglowError::KeywordFile(err) => Some(err),
            CodeglowError::Keyword(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CodeglowError {
    fn from(err: io::Error) -> Self {
        CodeglowError::Io(err)
    }
}

impl From<KeywordFileError> for CodeglowError {
    fn from(err: KeywordFileError) -> Self {
        CodeglowError::KeywordFile(err)
    }
}

impl From<KeywordError> for CodeglowError {
    fn from(err: KeywordError) -> Self {
        CodeglowError::Keyword(err)
    }
}

impl From<String> for CodeglowError {
    fn from(msg: String) -> Self {
        CodeglowError::Generic(msg)
    }
}
