use anyhow::Context;
use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::{debug, warn};

use crate::utils::grid::{Grid, Tile};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 13, tags = ["grid", "symmetry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Ash,
    Rock,
}

impl Tile for Terrain {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Terrain::Ash),
            '#' => Some(Terrain::Rock),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Terrain::Ash => '.',
            Terrain::Rock => '#',
        }
    }
}

/// Mirror line position, counted as lines before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    Horizontal(usize),
    Vertical(usize),
}

impl Reflection {
    pub fn score(self) -> usize {
        match self {
            Reflection::Horizontal(rows) => 100 * rows,
            Reflection::Vertical(cols) => cols,
        }
    }
}

fn differences<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// First `k` such that mirroring line `k - 1` onto `k` and outward differs
/// in exactly `smudges` cells.
fn mirror_line<L: AsRef<[Terrain]>>(lines: &[L], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&k| {
        let mut total = 0;
        for (above, below) in (0..k).rev().zip(k..lines.len()) {
            total += differences(lines[above].as_ref(), lines[below].as_ref());
            if total > smudges {
                return false;
            }
        }
        total == smudges
    })
}

pub fn find_reflection(pattern: &Grid<Terrain>, smudges: usize) -> Option<Reflection> {
    let rows: Vec<&[Terrain]> = (0..pattern.rows()).map(|r| pattern.row(r)).collect();
    if let Some(k) = mirror_line(&rows, smudges) {
        return Some(Reflection::Horizontal(k));
    }
    let cols: Vec<Vec<Terrain>> = (0..pattern.cols()).map(|c| pattern.column(c)).collect();
    mirror_line(&cols, smudges).map(Reflection::Vertical)
}

fn summarize(patterns: &[Grid<Terrain>], smudges: usize) -> usize {
    patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| match find_reflection(pattern, smudges) {
            Some(reflection) => {
                debug!(pattern = i + 1, ?reflection, "found mirror line");
                reflection.score()
            }
            None => {
                warn!(pattern = i + 1, smudges, "no mirror line\n{}", pattern);
                0
            }
        })
        .sum()
}

fn parse_patterns(input: &str) -> anyhow::Result<Vec<Grid<Terrain>>> {
    input
        .split("\n\n")
        .enumerate()
        .map(|(i, block)| Grid::parse(block).with_context(|| format!("pattern {}", i + 1)))
        .collect()
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Grid<Terrain>>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let patterns =
            parse_patterns(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        debug!(patterns = patterns.len(), "parsed terrain patterns");
        Ok(patterns)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 1).to_string())
    }
}
