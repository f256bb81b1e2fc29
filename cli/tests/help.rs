mod common;
use common::codeglow_cmd;

fn verify_help(args: &[&str], expected: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing help for args: {args:?}");
    let output = codeglow_cmd().args(args).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(format!(
            "Command failed for args {args:?}. stderr: {stderr}, stdout: {stdout}"
        )
        .into());
    }

    for needle in expected {
        if !stdout.contains(needle) {
            return Err(format!(
                "Help for {args:?} is missing {needle:?}.\nActual:\n---\n{stdout}\n---"
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_help_root() -> Result<(), Box<dyn std::error::Error>> {
    let commands = ["tokens", "highlight", "animate", "keywords", "--debug"];
    verify_help(&["help"], &commands)?;
    verify_help(&["--help"], &commands)
}

#[test]
fn test_no_arguments_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(&[], &["Usage:", "tokens"])
}

#[test]
fn test_tokens_help() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(
        &["tokens", "--help"],
        &["--source", "--lang", "--keywords", "--output", "c-like"],
    )
}

#[test]
fn test_highlight_help() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(
        &["highlight", "--help"],
        &["--theme", "showcase", "landing", "ansi"],
    )
}

#[test]
fn test_animate_help() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(
        &["animate", "--help"],
        &["--delay-ms", "--pace", "showcase", "[default: landing]"],
    )
}

#[test]
fn test_version() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(&["--version"], &["codeglow", env!("CARGO_PKG_VERSION")])
}
