//! Zuul CLI entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use zuul_foundation::Weight;
use zuul_runtime::{GameConfig, PlainEditor, Repl};

/// World of Zuul - find the ancient key and bring it to the admin office
#[derive(Parser, Debug)]
#[command(name = "zuul")]
#[command(version, about, long_about = None)]
struct Args {
    /// Carry limit in grams
    #[arg(long = "max-weight", value_name = "GRAMS", default_value_t = 5000)]
    max_weight: u32,

    /// Prompt shown before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Read plain lines from stdin instead of using the line editor
    #[arg(long)]
    plain: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_max_carry_weight(Weight::grams(self.max_weight))
            .with_prompt(self.prompt.clone())
            .with_banner(!self.no_banner)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> zuul_foundation::Result<()> {
    let config = args.config();
    log::debug!("starting with {config:?}");

    if args.plain || !io::stdin().is_terminal() {
        Repl::with_editor(PlainEditor::stdin(), &config)?.run()
    } else {
        Repl::new(&config)?.run()
    }
}
