use clap::{CommandFactory, Parser};

mod commands;
mod core;

use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "codeglow")]
#[command(about = "Tokenize and highlight source code snippets.")]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);
    crate::core::logger::Logger::debug(concat!("codeglow ", env!("CARGO_PKG_VERSION")));

    match args.command {
        Some(Commands::Tokens(tokens_args)) => commands::tokens::execute(&tokens_args),
        Some(Commands::Highlight(highlight_args)) => commands::highlight::execute(&highlight_args),
        Some(Commands::Animate(animate_args)) => commands::animate::execute(&animate_args),
        Some(Commands::Keywords(keywords_args)) => commands::keywords::execute(&keywords_args),
        None => {
            Args::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
