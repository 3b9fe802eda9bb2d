use itertools::Itertools;
use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::grid::{Coord, Grid, Tile};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 11, tags = ["grid", "galaxies"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Empty,
    Galaxy,
}

impl Tile for Space {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Space::Empty),
            '#' => Some(Space::Galaxy),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Space::Empty => '.',
            Space::Galaxy => '#',
        }
    }
}

#[derive(Debug)]
pub struct SharedData {
    galaxies: Vec<Coord>,
    /// `empty_rows_before[r]` = empty rows strictly above row `r`
    empty_rows_before: Vec<usize>,
    empty_cols_before: Vec<usize>,
}

impl SharedData {
    /// Sum of pairwise distances once every empty row and column has grown
    /// to `factor` copies of itself.
    fn distance_sum(&self, factor: usize) -> usize {
        let expanded: Vec<Coord> = self
            .galaxies
            .iter()
            .map(|&Coord { row, col }| {
                Coord::new(
                    row + (factor - 1) * self.empty_rows_before[row],
                    col + (factor - 1) * self.empty_cols_before[col],
                )
            })
            .collect();

        expanded
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.manhattan(*b))
            .sum()
    }
}

fn prefix_counts(empty: impl Iterator<Item = bool>) -> Vec<usize> {
    empty
        .scan(0, |seen, is_empty| {
            let before = *seen;
            *seen += usize::from(is_empty);
            Some(before)
        })
        .collect()
}

impl PuzzleParser for Solver {
    type Input<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let grid: Grid<Space> =
            Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let galaxies: Vec<Coord> = grid
            .iter()
            .filter(|(_, tile)| **tile == Space::Galaxy)
            .map(|(coord, _)| coord)
            .collect();
        let empty_rows_before = prefix_counts(
            (0..grid.rows()).map(|r| !grid.row(r).contains(&Space::Galaxy)),
        );
        let empty_cols_before = prefix_counts(
            (0..grid.cols()).map(|c| !grid.column(c).contains(&Space::Galaxy)),
        );
        debug!(galaxies = galaxies.len(), "parsed galaxy image");

        Ok(SharedData {
            galaxies,
            empty_rows_before,
            empty_cols_before,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(shared.distance_sum(2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(shared.distance_sum(1_000_000).to_string())
    }
}
