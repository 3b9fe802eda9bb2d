use std::collections::HashMap;

use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::grid::{Coord, Direction, Grid, Tile};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 14, tags = ["grid", "simulation"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rock {
    Round,
    Cube,
    Empty,
}

impl Tile for Rock {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            '.' => Some(Rock::Empty),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Rock::Round => 'O',
            Rock::Cube => '#',
            Rock::Empty => '.',
        }
    }
}

/// Slide every round rock as far as it goes in `direction`.
pub fn tilt(grid: &mut Grid<Rock>, direction: Direction) {
    let (rows, cols) = grid.dimensions();
    let (lanes, len) = if direction.is_vertical() {
        (cols, rows)
    } else {
        (rows, cols)
    };

    for lane in 0..lanes {
        // `i` counts from the edge the rocks roll toward.
        let coord_at = |i: usize| {
            let pos = match direction {
                Direction::North | Direction::West => i,
                Direction::South | Direction::East => len - 1 - i,
            };
            if direction.is_vertical() {
                Coord::new(pos, lane)
            } else {
                Coord::new(lane, pos)
            }
        };

        let mut free = 0;
        for i in 0..len {
            let here = coord_at(i);
            match grid.tile_at(here).copied() {
                Some(Rock::Cube) => free = i + 1,
                Some(Rock::Round) => {
                    if free != i {
                        grid.set(here, Rock::Empty);
                        grid.set(coord_at(free), Rock::Round);
                    }
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// North, West, South, East.
pub fn spin(grid: &mut Grid<Rock>) {
    for direction in [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ] {
        tilt(grid, direction);
    }
}

/// Run `total` spin cycles, skipping whole periods once a state repeats.
pub fn spin_cycles(mut grid: Grid<Rock>, total: usize) -> Grid<Rock> {
    let mut seen: HashMap<Grid<Rock>, usize> = HashMap::new();
    let mut done = 0;
    while done < total {
        if let Some(&first) = seen.get(&grid) {
            let period = done - first;
            let remaining = (total - done) % period;
            debug!(first, period, remaining, "platform state repeats");
            for _ in 0..remaining {
                spin(&mut grid);
            }
            return grid;
        }
        seen.insert(grid.clone(), done);
        spin(&mut grid);
        done += 1;
    }
    grid
}

/// Each round rock weighs its distance from the south edge, inclusive.
pub fn north_load(grid: &Grid<Rock>) -> usize {
    grid.iter()
        .filter(|(_, rock)| **rock == Rock::Round)
        .map(|(coord, _)| grid.rows() - coord.row)
        .sum()
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<Rock>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let grid: Grid<Rock> =
            Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        debug!(dimensions = ?grid.dimensions(), "parsed platform");
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        tilt(&mut platform, Direction::North);
        Ok(north_load(&platform).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let platform = spin_cycles(shared.clone(), SPIN_CYCLES);
        Ok(north_load(&platform).to_string())
    }
}
