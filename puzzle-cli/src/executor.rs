//! Reads the input and runs the selected solver parts

use crate::config::Config;
use crate::error::CliError;
use chrono::TimeDelta;
use puzzle_solver::{RegistryBuilder, SolveResult, SolverRegistry};
use std::path::Path;
use tracing::{debug, info};

/// Everything one run produced, in part order
#[derive(Debug)]
pub struct Report {
    pub year: u16,
    pub day: u8,
    pub parse_time: TimeDelta,
    pub results: Vec<SolveResult>,
}

impl Report {
    /// Parse time plus every part's solve time
    pub fn total_time(&self) -> TimeDelta {
        self.results
            .iter()
            .fold(self.parse_time, |total, result| total + result.elapsed)
    }
}

/// Build a registry from the linked plugins, keeping those that carry every tag
pub fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Read the puzzle input, dropping every trailing newline
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let mut input = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    input.truncate(input.trim_end_matches('\n').len());
    debug!(path = %path.display(), bytes = input.len(), "read input");
    Ok(input)
}

pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Parse `input` with the configured solver and solve the selected parts
    pub fn execute(&self, config: &Config, input: &str) -> Result<Report, CliError> {
        let (year, day) = (config.year, config.day);
        let mut solver = self.registry.create_solver(year, day, input)?;
        let parts = config.parts(solver.parts())?;
        let parse_time = solver.parse_time();
        info!(year, day, parse = %parse_time, "parsed input");

        let mut results = Vec::new();
        for part in parts {
            let result = solver.solve(part)?;
            info!(part, answer = %result.answer, elapsed = %result.elapsed, "solved");
            results.push(result);
        }

        Ok(Report {
            year,
            day,
            parse_time,
            results,
        })
    }
}
