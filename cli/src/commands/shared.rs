use crate::commands::validators;
use crate::core::error::{CodeglowError, KeywordFileError};
use crate::core::formatter::OutputFormat;
use crate::debug_log;
use clap::{Args, ValueEnum};
use codeglow_lib::{KeywordSet, Language, LexerConfig, Theme};
use std::io::Read;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        default_value = "-",
        help = "Path to the source file, or - for stdin",
        value_parser = validators::validate_source
    )]
    pub source: String,
}

impl SourceArgs {
    pub fn read(&self) -> Result<String, CodeglowError> {
        if self.source == "-" {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            debug_log!("Read {} bytes from stdin", input.len());
            Ok(input)
        } else {
            let input = std::fs::read_to_string(&self.source)?;
            debug_log!("Read {} bytes from {}", input.len(), self.source);
            Ok(input)
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Python,
    CLike,
    Mixed,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Python => Language::Python,
            LanguageArg::CLike => Language::CLike,
            LanguageArg::Mixed => Language::Mixed,
        }
    }
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(
        short = 'l',
        long = "lang",
        help = "Source language profile",
        default_value = "python",
        value_enum,
        ignore_case = true
    )]
    pub language: LanguageArg,

    #[arg(
        short = 'k',
        long = "keywords",
        value_name = "FILE",
        help = "JSON array of keywords replacing the profile's set",
        value_parser = validators::validate_keyword_file
    )]
    pub keywords: Option<String>,
}

impl ProfileArgs {
    pub fn config(&self) -> Result<LexerConfig, CodeglowError> {
        let language = Language::from(self.language);
        let config = language.config();
        match &self.keywords {
            Some(path) => {
                let keywords = load_keyword_file(path)?;
                debug_log!(
                    "Using {} keywords from {} with the {} profile",
                    keywords.len(),
                    path,
                    language
                );
                Ok(config.with_keywords(keywords))
            }
            None => {
                debug_log!("Using the {} profile", language);
                Ok(config)
            }
        }
    }
}

pub fn load_keyword_file(path: &str) -> Result<KeywordSet, CodeglowError> {
    let content = std::fs::read_to_string(path)?;
    let words: Vec<String> = serde_json::from_str(&content)
        .map_err(|err| KeywordFileError::from_json(&err, path))?;
    Ok(KeywordSet::from_words(words)?)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Showcase,
    Landing,
    Ansi,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Showcase => Theme::Showcase,
            ThemeArg::Landing => Theme::Landing,
            ThemeArg::Ansi => Theme::Ansi,
        }
    }
}
