use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::{debug, warn};

use crate::utils::grid::{Path, PipeMaze};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 10, tags = ["grid", "pipes"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    maze: PipeMaze,
    main_loop: Option<Option<Path>>,
}

impl PuzzleParser for Solver {
    type Input<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let maze = PipeMaze::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        debug!(start = %maze.start(), dimensions = ?maze.grid().dimensions(), "parsed pipe maze");
        Ok(SharedData {
            maze,
            main_loop: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let farthest = main_loop(shared).map_or(0, Path::farthest);
        Ok(farthest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        main_loop(shared);
        let SharedData { maze, main_loop: found } = shared;
        let enclosed = match found {
            Some(Some(path)) => maze.enclosed_tiles(path),
            _ => 0,
        };
        Ok(enclosed.to_string())
    }
}

/// The loop through the start tile, searched once for both parts.
fn main_loop(shared: &mut SharedData) -> Option<&Path> {
    let maze = &shared.maze;
    shared
        .main_loop
        .get_or_insert_with(|| {
            let found = maze.find_loop();
            match &found {
                Some(path) => debug!(length = path.len(), "found main loop"),
                None => warn!(
                    start = %maze.start(),
                    "no loop through the start tile\n{}",
                    maze.grid()
                ),
            }
            found
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn part1_examples() {
        assert_eq!(solve::<1>(".....\n.S-7.\n.|.|.\n.L-J.\n....."), "4");
        assert_eq!(solve::<1>("..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ..."), "8");
    }

    #[test]
    fn part2_examples() {
        let squeeze = "..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";
        assert_eq!(solve::<2>(squeeze), "4");

        let scattered = ".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";
        assert_eq!(solve::<2>(scattered), "8");
    }

    #[test]
    fn no_loop_counts_zero() {
        assert_eq!(solve::<1>("S-.\n|.."), "0");
        assert_eq!(solve::<2>("S-.\n|.."), "0");
    }

    #[test]
    fn malformed_start_is_a_parse_error() {
        let err = Solver::parse("...\n.S.\n...").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("start tile")));
    }
}
