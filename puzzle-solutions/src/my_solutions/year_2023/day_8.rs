use std::collections::HashMap;

use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use thiserror::Error;
use tracing::debug;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 8, tags = ["graph", "network"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("network has no node {0}")]
    MissingNode(String),
    #[error("walk from {0} never reaches a target")]
    Unreachable(String),
    #[error("step count overflowed")]
    Overflow,
}

impl From<WalkError> for SolveError {
    fn from(e: WalkError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}

/// Turn instructions plus the node table, with nodes addressed by index
#[derive(Debug)]
pub struct Network<'a> {
    turns: Vec<Turn>,
    names: Vec<&'a str>,
    /// `links[i]` = (left, right) targets of node `i`
    links: Vec<(usize, usize)>,
}

impl Network<'_> {
    fn index_of(&self, name: &str) -> Result<usize, WalkError> {
        self.names
            .iter()
            .position(|&n| n == name)
            .ok_or_else(|| WalkError::MissingNode(name.to_string()))
    }

    /// Steps from `start` until `is_target` holds, following the turns on
    /// repeat. Fails once a (node, turn position) state repeats.
    fn steps_until(
        &self,
        start: usize,
        is_target: impl Fn(&str) -> bool,
    ) -> Result<u64, WalkError> {
        let limit = self.turns.len() * self.names.len();
        let mut node = start;
        for (steps, &turn) in self.turns.iter().cycle().take(limit).enumerate() {
            if is_target(self.names[node]) {
                return Ok(steps as u64);
            }
            let (left, right) = self.links[node];
            node = match turn {
                Turn::Left => left,
                Turn::Right => right,
            };
        }
        Err(WalkError::Unreachable(self.names[start].to_string()))
    }

    fn steps_to_exit(&self) -> Result<u64, WalkError> {
        let start = self.index_of("AAA")?;
        self.index_of("ZZZ")?;
        self.steps_until(start, |name| name == "ZZZ")
    }

    /// Steps until every `..A` walker stands on a `..Z` node at once.
    ///
    /// Each walker's first arrival repeats with that period, so the answer
    /// is the least common multiple of the arrival times.
    fn ghost_steps(&self) -> Result<u64, WalkError> {
        let mut total = 1;
        for (start, name) in self.names.iter().enumerate() {
            if !name.ends_with('A') {
                continue;
            }
            let steps = self.steps_until(start, |node| node.ends_with('Z'))?;
            debug!(start = *name, steps, "ghost arrived");
            total = lcm(total, steps).ok_or(WalkError::Overflow)?;
        }
        Ok(total)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

fn parse_turns(line: &str) -> Result<Vec<Turn>, ParseError> {
    if line.is_empty() {
        return Err(ParseError::MissingData("turn instructions".to_string()));
    }
    line.chars()
        .map(|c| match c {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => Err(ParseError::InvalidFormat(format!("unknown turn {other:?}"))),
        })
        .collect()
}

/// `AAA = (BBB, CCC)` into its three names.
fn parse_node(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let malformed = || ParseError::InvalidFormat(format!("malformed node {line:?}"));
    let (name, targets) = line.split_once(" = ").ok_or_else(malformed)?;
    let (left, right) = targets
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .and_then(|t| t.split_once(", "))
        .ok_or_else(malformed)?;
    Ok((name, left, right))
}

impl PuzzleParser for Solver {
    type Input<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut lines = input.lines();
        let turns = parse_turns(lines.next().unwrap_or_default())?;

        let nodes: Vec<(&str, &str, &str)> = lines
            .filter(|line| !line.is_empty())
            .map(parse_node)
            .collect::<Result<_, _>>()?;
        if nodes.is_empty() {
            return Err(ParseError::MissingData("network nodes".to_string()));
        }

        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, (name, _, _))| (*name, i))
            .collect();
        if index.len() != nodes.len() {
            return Err(ParseError::InvalidFormat("duplicate node name".to_string()));
        }
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| ParseError::MissingData(format!("node {name}")))
        };
        let links = nodes
            .iter()
            .map(|(_, left, right)| Ok((lookup(*left)?, lookup(*right)?)))
            .collect::<Result<Vec<_>, ParseError>>()?;

        debug!(turns = turns.len(), nodes = nodes.len(), "parsed network");
        Ok(Network {
            turns,
            names: nodes.into_iter().map(|(name, _, _)| name).collect(),
            links,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(network: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(network.steps_to_exit()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(network: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(network.ghost_steps()?.to_string())
    }
}
