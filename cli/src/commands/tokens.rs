use crate::commands::shared::{OutputArgs, ProfileArgs, SourceArgs};
use crate::core::formatter::{get_formatter, OutputFormat};
use crate::debug_log;
use clap::Args;
use codeglow_lib::{tokenize_with, Token};
use serde::Serialize;

/// Text-mode row; field names sort in display order.
#[derive(Serialize)]
struct TokenRow {
    kind: String,
    span: String,
    value: String,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind.to_string(),
            span: format!("{}..{}", token.span.start, token.span.end),
            value: format!("{:?}", token.value),
        }
    }
}

#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &TokensArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.source.read()?;
    let config = args.profile.config()?;
    let tokens = tokenize_with(&input, &config);
    debug_log!("Produced {} tokens", tokens.len());

    let formatter = get_formatter(&args.output.output);
    let rendered = match args.output.output {
        OutputFormat::Json => formatter.format_list(&tokens, "", "No tokens"),
        OutputFormat::Text => {
            let rows: Vec<TokenRow> = tokens.iter().map(TokenRow::from).collect();
            formatter.format_list(&rows, "", "No tokens")
        }
    };
    print!("{rendered}");

    Ok(())
}
