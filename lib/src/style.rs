use crate::error::ParseError;
use crate::token::TokenKind;
use std::fmt;
use std::str::FromStr;

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_MAGENTA: &str = "\x1b[35m";
pub const ANSI_YELLOW: &str = "\x1b[33m";
pub const ANSI_CYAN: &str = "\x1b[36m";
pub const ANSI_BLUE: &str = "\x1b[34m";
pub const ANSI_DIM_ITALIC: &str = "\x1b[2;3m";

/// A fixed mapping from token kind to a display style. An empty style
/// means the token renders as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Tailwind classes of the code showcase card.
    Showcase,
    /// Tailwind classes of the landing page hero editor.
    #[default]
    Landing,
    /// Terminal escape sequences.
    Ansi,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Showcase, Theme::Landing, Theme::Ansi];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Showcase => "showcase",
            Theme::Landing => "landing",
            Theme::Ansi => "ansi",
        }
    }

    pub fn is_html(&self) -> bool {
        !matches!(self, Theme::Ansi)
    }

    pub fn style_for(&self, kind: TokenKind) -> &'static str {
        match self {
            Theme::Showcase => match kind {
                TokenKind::Keyword => "text-blue-400 font-medium",
                TokenKind::String => "text-green-400",
                TokenKind::Comment => "text-gray-500 italic",
                TokenKind::Number => "text-orange-400",
                TokenKind::Punctuation => "text-gray-300",
                TokenKind::CallTarget | TokenKind::Identifier | TokenKind::Text => {
                    "text-gray-100"
                }
                TokenKind::Whitespace => "",
            },
            Theme::Landing => match kind {
                TokenKind::Keyword => "text-pink-400",
                TokenKind::String => "text-amber-300",
                TokenKind::Comment => "text-green-400",
                TokenKind::Number => "text-cyan-300",
                TokenKind::CallTarget => "text-violet-300",
                TokenKind::Punctuation
                | TokenKind::Identifier
                | TokenKind::Text
                | TokenKind::Whitespace => "",
            },
            Theme::Ansi => match kind {
                TokenKind::Keyword => ANSI_MAGENTA,
                TokenKind::String => ANSI_YELLOW,
                TokenKind::Comment => ANSI_DIM_ITALIC,
                TokenKind::Number => ANSI_CYAN,
                TokenKind::CallTarget => ANSI_BLUE,
                TokenKind::Punctuation
                | TokenKind::Identifier
                | TokenKind::Text
                | TokenKind::Whitespace => "",
            },
        }
    }
}

/// Style of `kind` under the default theme.
pub fn style_for(kind: TokenKind) -> &'static str {
    Theme::default().style_for(kind)
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("theme", s))
    }
}
