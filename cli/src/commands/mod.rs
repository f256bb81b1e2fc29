pub mod animate;
pub mod highlight;
pub mod keywords;
pub mod shared;
pub mod tokens;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the token stream of a source file")]
    Tokens(tokens::TokensArgs),
    #[command(about = "Print a source file with syntax highlighting")]
    Highlight(highlight::HighlightArgs),
    #[command(about = "Replay the typing animation in the terminal")]
    Animate(animate::AnimateArgs),
    #[command(about = "List the keywords of a language profile")]
    Keywords(keywords::KeywordsArgs),
}
