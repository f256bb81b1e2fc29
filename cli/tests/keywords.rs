mod common;
use common::{codeglow_cmd, run_with_stdin, stdout_of};
use serde_json::Value;
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join(format!("codeglow_test_{name}"));
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_keywords_list_python() -> Result<(), Box<dyn std::error::Error>> {
    let output = codeglow_cmd().args(["keywords", "-o", "json"]).output()?;
    let words: Vec<String> = serde_json::from_str(&stdout_of(&output)?)?;

    for word in ["def", "lambda", "None", "function", "await"] {
        if !words.iter().any(|w| w == word) {
            return Err(format!("Missing keyword {word} in {words:?}").into());
        }
    }
    let mut sorted = words.clone();
    sorted.sort();
    if sorted != words {
        return Err("Keywords are not sorted".into());
    }
    Ok(())
}

#[test]
fn test_keywords_text_has_title() -> Result<(), Box<dyn std::error::Error>> {
    let output = codeglow_cmd().args(["keywords", "-l", "c-like"]).output()?;
    let stdout = stdout_of(&output)?;
    if !stdout.starts_with("Keywords:\n") || !stdout.contains("\ntypeof\n") {
        return Err(format!("Unexpected output: {stdout}").into());
    }
    Ok(())
}

#[test]
fn test_custom_keyword_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_temp("custom.json", r#"["print", "fn"]"#)?;
    let path_str = path.to_str().ok_or("temp path is not UTF-8")?;

    let output = run_with_stdin(&["tokens", "-k", path_str, "-o", "json"], "print(def)")?;
    let keywords = codeglow_cmd()
        .args(["keywords", "-k", path_str, "-o", "json"])
        .output()?;
    let _ = std::fs::remove_file(&path);

    let tokens: Value = serde_json::from_str(&stdout_of(&output)?)?;
    if tokens[0]["kind"] != "keyword" || tokens[2]["kind"] != "identifier" {
        return Err(format!("Custom keywords not applied: {tokens}").into());
    }

    let words: Vec<String> = serde_json::from_str(&stdout_of(&keywords)?)?;
    if words != ["fn", "print"] {
        return Err(format!("Unexpected keyword list: {words:?}").into());
    }
    Ok(())
}

#[test]
fn test_malformed_keyword_file_is_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_temp("malformed.json", "[\"ok\",\n  42]")?;
    let output = codeglow_cmd()
        .args(["keywords", "-k", path.to_str().ok_or("temp path is not UTF-8")?])
        .output()?;
    let _ = std::fs::remove_file(&path);

    if output.status.code() != Some(3) {
        return Err(format!("Expected exit code 3, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.starts_with("Error: Invalid keyword file") || !stderr.contains("at line 2") {
        return Err(format!("Unexpected error message: {stderr}").into());
    }
    Ok(())
}

#[test]
fn test_invalid_keyword_is_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_temp("invalid_word.json", r#"["good", "bad-word"]"#)?;
    let output = codeglow_cmd()
        .args(["keywords", "-k", path.to_str().ok_or("temp path is not UTF-8")?])
        .output()?;
    let _ = std::fs::remove_file(&path);

    if output.status.code() != Some(3) {
        return Err(format!("Expected exit code 3, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("\"bad-word\"") {
        return Err(format!("Unexpected error message: {stderr}").into());
    }
    Ok(())
}
