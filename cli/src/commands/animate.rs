use crate::commands::shared::{ProfileArgs, SourceArgs};
use crate::commands::validators;
use crate::debug_log;
use clap::{Args, ValueEnum};
use codeglow_lib::typing::{LANDING_DELAY, SHOWCASE_DELAY};
use codeglow_lib::{render_ansi, tokenize_with, Typewriter};
use std::io::Write;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CURSOR: &str = "|";

/// Typing speed presets.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaceArg {
    Showcase,
    Landing,
}

impl PaceArg {
    pub fn delay(self) -> Duration {
        match self {
            PaceArg::Showcase => SHOWCASE_DELAY,
            PaceArg::Landing => LANDING_DELAY,
        }
    }
}

#[derive(Debug, Args)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[arg(
        long,
        value_enum,
        default_value_t = PaceArg::Landing,
        help = "Typing speed preset"
    )]
    pub pace: PaceArg,

    #[arg(
        long = "delay-ms",
        value_name = "MS",
        help = "Delay between typed characters, overrides --pace",
        value_parser = validators::validate_delay
    )]
    pub delay_ms: Option<u64>,
}

impl AnimateArgs {
    pub fn delay(&self) -> Duration {
        self.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.pace.delay())
    }
}

pub fn execute(args: &AnimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.source.read()?;
    let config = args.profile.config()?;
    let delay = args.delay();
    let typewriter = Typewriter::new(&input);
    debug_log!(
        "Animating {} frames at {}ms per frame",
        typewriter.frame_count(),
        delay.as_millis()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in typewriter {
        let tokens = frame.tokens(&config);
        write!(out, "{CLEAR_SCREEN}{}{CURSOR}", render_ansi(&tokens))?;
        out.flush()?;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    // Final frame without the cursor.
    let tokens = tokenize_with(&input, &config);
    writeln!(out, "{CLEAR_SCREEN}{}", render_ansi(&tokens))?;
    out.flush()?;

    Ok(())
}
