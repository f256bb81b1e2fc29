use std::path::Path;

/// Longest per-frame delay `animate` accepts.
pub const MAX_DELAY_MS: u64 = 5_000;

pub fn validate_source(path: &str) -> Result<String, String> {
    if path == "-" || Path::new(path).is_file() {
        Ok(path.to_string())
    } else if Path::new(path).exists() {
        Err(format!("Not a file: {path}"))
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_keyword_file(path: &str) -> Result<String, String> {
    if path == "-" {
        return Err("Keyword file cannot be read from stdin".to_string());
    }
    validate_source(path)
}

pub fn validate_delay(value: &str) -> Result<u64, String> {
    let delay: u64 = value
        .parse()
        .map_err(|_| format!("Delay must be a whole number of milliseconds: {value}"))?;
    if delay > MAX_DELAY_MS {
        return Err(format!("Delay must be {MAX_DELAY_MS} ms or less"));
    }
    Ok(delay)
}
