use crate::style::{Theme, ANSI_RESET};
use crate::token::Token;
use std::borrow::Cow;

/// Escapes `&`, `<` and `>` so token text can sit inside an element.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>')) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

pub fn render_html(tokens: &[Token], theme: Theme) -> String {
    let mut out = String::new();
    for token in tokens {
        let class = theme.style_for(token.kind);
        let text = escape_html(&token.value);
        if class.is_empty() {
            out.push_str(&text);
        } else {
            out.push_str(&format!("<span class=\"{class}\">{text}</span>"));
        }
    }
    out
}

pub fn render_ansi(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let style = Theme::Ansi.style_for(token.kind);
        if style.is_empty() {
            out.push_str(&token.value);
        } else {
            out.push_str(style);
            out.push_str(&token.value);
            out.push_str(ANSI_RESET);
        }
    }
    out
}

/// Renders with `theme`, as HTML or as terminal output.
pub fn render(tokens: &[Token], theme: Theme) -> String {
    if theme.is_html() {
        render_html(tokens, theme)
    } else {
        render_ansi(tokens)
    }
}
