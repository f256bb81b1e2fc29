use crate::commands::shared::{OutputArgs, ProfileArgs};
use clap::Args;

#[derive(Debug, Args)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &KeywordsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.profile.config()?;
    let words: Vec<&str> = config.keywords().iter().collect();

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&words, "Keywords:", "No keywords configured")
    );

    Ok(())
}
