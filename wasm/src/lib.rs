//! Browser bindings for the codeglow tokenizer.

use codeglow_lib::{render, tokenize_with, Language, Theme, Token, TokenKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse_language(language: Option<String>) -> Result<Language, String> {
    language
        .map(|name| name.parse::<Language>().map_err(|e| e.to_string()))
        .unwrap_or(Ok(Language::default()))
}

fn parse_theme(theme: Option<String>) -> Result<Theme, String> {
    theme
        .map(|name| name.parse::<Theme>().map_err(|e| e.to_string()))
        .unwrap_or(Ok(Theme::default()))
}

fn tokens_json(source: &str, language: Language) -> Result<String, String> {
    let tokens: Vec<Token> = tokenize_with(source, &language.config());
    to_json(&tokens)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn style(kind: &str, theme: Theme) -> Result<&'static str, String> {
    let kind: TokenKind = kind.parse().map_err(|e: codeglow_lib::ParseError| e.to_string())?;
    Ok(theme.style_for(kind))
}

/// Tokenizes `source`; returns an array of `{ kind, value, span }`.
#[wasm_bindgen]
pub fn tokenize(source: &str, language: Option<String>) -> Result<JsValue, JsValue> {
    let language = parse_language(language).map_err(|e| JsValue::from_str(&e))?;
    let json = tokens_json(source, language).map_err(|e| JsValue::from_str(&e))?;
    js_sys::JSON::parse(&json)
}

#[wasm_bindgen(js_name = styleFor)]
pub fn style_for(kind: &str, theme: Option<String>) -> Result<String, JsValue> {
    let theme = parse_theme(theme).map_err(|e| JsValue::from_str(&e))?;
    style(kind, theme)
        .map(str::to_string)
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = highlightHtml)]
pub fn highlight_html(
    source: &str,
    theme: Option<String>,
    language: Option<String>,
) -> Result<String, JsValue> {
    let theme = parse_theme(theme).map_err(|e| JsValue::from_str(&e))?;
    let language = parse_language(language).map_err(|e| JsValue::from_str(&e))?;
    if !theme.is_html() {
        return Err(JsValue::from_str("highlightHtml needs an HTML theme"));
    }
    let tokens = tokenize_with(source, &language.config());
    Ok(render(&tokens, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(parse_language(None), Ok(Language::Python));
        assert_eq!(parse_theme(None), Ok(Theme::Landing));
        assert_eq!(parse_theme(Some("showcase".into())), Ok(Theme::Showcase));
        assert!(parse_language(Some("fortran".into())).is_err());
    }

    #[test]
    fn test_tokens_json_shape() {
        let json = tokens_json("f(1)", Language::Python).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "call_target");
        assert_eq!(value[2]["value"], "1");
        assert_eq!(value[3]["span"]["end"], 4);
    }

    #[test]
    fn test_style_lookup() {
        assert_eq!(style("keyword", Theme::Landing), Ok("text-pink-400"));
        assert_eq!(style("whitespace", Theme::Showcase), Ok(""));
        assert_eq!(
            style("operator", Theme::Landing),
            Err("Unknown token kind: operator".to_string())
        );
    }
}
