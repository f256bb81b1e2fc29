use crate::commands::shared::{ProfileArgs, SourceArgs, ThemeArg};
use crate::debug_log;
use clap::Args;
use codeglow_lib::{render, tokenize_with, Theme};

#[derive(Debug, Args)]
pub struct HighlightArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[arg(
        short = 't',
        long = "theme",
        help = "ansi for the terminal, showcase or landing for HTML spans",
        default_value = "ansi",
        value_enum,
        ignore_case = true
    )]
    pub theme: ThemeArg,
}

pub fn execute(args: &HighlightArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.source.read()?;
    let config = args.profile.config()?;
    let theme = Theme::from(args.theme);
    let tokens = tokenize_with(&input, &config);
    debug_log!("Rendering {} tokens with the {} theme", tokens.len(), theme);

    let mut out = render(&tokens, theme);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    print!("{out}");

    Ok(())
}
