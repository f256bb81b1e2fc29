pub mod error;
pub mod keywords;
pub mod language;
pub mod render;
pub mod style;
pub mod token;
pub mod tokenize;
pub mod typing;

pub use error::{KeywordError, ParseError};
pub use keywords::KeywordSet;
pub use language::{Language, LexerConfig};
pub use render::{escape_html, render, render_ansi, render_html};
pub use style::{style_for, Theme};
pub use token::{Token, TokenKind};
pub use tokenize::{tokenize, tokenize_with, Lexer};
pub use typing::{Frame, Typewriter};
