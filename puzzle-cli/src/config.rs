//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use puzzle_solver::BASE_YEAR;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::Level;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    pub input: PathBuf,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    pub quiet: bool,
    pub log_level: Level,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.year < BASE_YEAR {
            return Err(CliError::Config(format!(
                "year {} is before the first puzzle year {}",
                args.year, BASE_YEAR
            )));
        }

        Ok(Config {
            year: args.year,
            day: args.day,
            input: args.input,
            part_filter: args.part,
            tags: args.tags,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        })
    }

    /// Parts to run for a solver with `max_parts` parts.
    pub fn parts(&self, max_parts: u8) -> Result<RangeInclusive<u8>, CliError> {
        match self.part_filter {
            Some(p) if p <= max_parts => Ok(p..=p),
            Some(p) => Err(CliError::Config(format!(
                "{}/{:02} has {} part(s), cannot run part {}",
                self.year, self.day, max_parts, p
            ))),
            None => Ok(1..=max_parts),
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
