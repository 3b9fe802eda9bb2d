use std::collections::{BTreeSet, HashMap};

use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use tracing::debug;

use crate::utils::grid::{Coord, Grid, Tile};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 3, tags = ["grid", "schematic"])]
pub struct Solver;

const GEAR: Schematic = Schematic::Symbol('*');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schematic {
    Blank,
    Digit(u8),
    Symbol(char),
}

impl Tile for Schematic {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Schematic::Blank),
            '0'..='9' => Some(Schematic::Digit(c as u8 - b'0')),
            c if c.is_ascii_punctuation() => Some(Schematic::Symbol(c)),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Schematic::Blank => '.',
            Schematic::Digit(d) => char::from(b'0' + d),
            Schematic::Symbol(c) => c,
        }
    }
}

/// A horizontal run of digits and every symbol cell touching one of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartNumber {
    value: u64,
    symbols: BTreeSet<Coord>,
}

#[derive(Debug)]
pub struct Engine {
    grid: Grid<Schematic>,
    numbers: Vec<PartNumber>,
}

impl Engine {
    fn part_number_sum(&self) -> u64 {
        self.numbers
            .iter()
            .filter(|number| !number.symbols.is_empty())
            .map(|number| number.value)
            .sum()
    }

    /// Sum of `a * b` over gears touching exactly two numbers `a` and `b`.
    fn gear_ratio_sum(&self) -> u64 {
        let mut by_gear: HashMap<Coord, Vec<u64>> = HashMap::new();
        for number in &self.numbers {
            for &symbol in &number.symbols {
                if self.grid.tile_at(symbol) == Some(&GEAR) {
                    by_gear.entry(symbol).or_default().push(number.value);
                }
            }
        }

        by_gear
            .values()
            .filter(|values| values.len() == 2)
            .map(|values| values.iter().product::<u64>())
            .sum()
    }
}

fn scan_numbers(grid: &Grid<Schematic>) -> Result<Vec<PartNumber>, ParseError> {
    let mut numbers = Vec::new();
    for row in 0..grid.rows() {
        let mut current: Option<PartNumber> = None;
        for (col, &tile) in grid.row(row).iter().enumerate() {
            let Schematic::Digit(digit) = tile else {
                numbers.extend(current.take());
                continue;
            };

            let here = Coord::new(row, col);
            let number = current.get_or_insert_with(PartNumber::default);
            number.value = number
                .value
                .checked_mul(10)
                .and_then(|value| value.checked_add(u64::from(digit)))
                .ok_or_else(|| ParseError::InvalidFormat(format!("number too large at {here}")))?;
            number.symbols.extend(
                grid.surrounding(here)
                    .filter(|&near| matches!(grid.tile_at(near), Some(Schematic::Symbol(_)))),
            );
        }
        numbers.extend(current);
    }
    Ok(numbers)
}

impl PuzzleParser for Solver {
    type Input<'a> = Engine;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let grid: Grid<Schematic> =
            Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let numbers = scan_numbers(&grid)?;
        debug!(numbers = numbers.len(), "scanned engine schematic");
        Ok(Engine { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(engine: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(engine.part_number_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(engine: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(engine.gear_ratio_sum().to_string())
    }
}
