use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::{Level, debug, enabled};

use crate::utils::grid::beam::{self, BeamTile};
use crate::utils::grid::{Coord, Direction, Grid};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 16, tags = ["grid", "beam"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type Input<'a> = Grid<BeamTile>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let grid: Grid<BeamTile> =
            Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        debug!(dimensions = ?grid.dimensions(), "parsed contraption");
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let visited = beam::trace(shared, Coord::new(0, 0), Direction::East);
        if enabled!(Level::DEBUG) {
            debug!("energized tiles\n{}", beam::render_energized(shared, &visited));
        }
        Ok(visited.energized().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(beam::best_energized(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    #[test]
    fn example_answers() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "46");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "51");
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = Solver::parse("./\n.*").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFormat(msg) if msg == "invalid tile '*' at row 1, column 1"
        ));
    }
}
