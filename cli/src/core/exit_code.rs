use crate::core::error::CodeglowError;

/// Exit codes for the codeglow CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Invalid arguments (reported by clap itself)
    UsageError = 2,
    /// Bad keyword file or profile
    ConfigError = 3,
    /// Source file could not be read
    FileError = 4,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(err) = error.downcast_ref::<CodeglowError>() {
            match err {
                CodeglowError::Io(_) => ExitCode::FileError,
                CodeglowError::KeywordFile(_) => ExitCode::ConfigError,
                CodeglowError::Keyword(_) => ExitCode::ConfigError,
                CodeglowError::Generic(_) => ExitCode::GeneralError,
            }
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
