//! puzzles - command-line runner for the grid puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Linked for its solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing::Level;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // a failed write to stderr leaves nowhere to report it
            e.print().ok();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level);

    let registry = executor::build_registry(&config.tags)?;
    let input = executor::read_input(&config.input)?;
    let report = Executor::new(registry).execute(&config, &input)?;

    OutputFormatter::new(config.quiet).print(&report);
    Ok(())
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
