//! Parse-once, solve-per-part traits

use crate::error::{ParseError, SolveError};

/// Turns a day's raw text into the value its parts operate on.
///
/// `Input<'a>` may borrow from the text, so a solver that only slices lines
/// never has to copy them.
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct Widths;
///
/// impl PuzzleParser for Widths {
///     type Input<'a> = Vec<usize>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(input.lines().map(str::len).collect())
///     }
/// }
///
/// assert_eq!(Widths::parse("..#\n.#").unwrap(), vec![3, 2]);
/// ```
pub trait PuzzleParser {
    type Input<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Answer for part `N`.
///
/// One impl per part; `#[derive(PuzzleSolver)]` turns them into a
/// [`Solver`].
///
/// ```
/// use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
///
/// struct Walls;
///
/// impl PuzzleParser for Walls {
///     type Input<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Walls {
///     fn solve(text: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(text.matches('#').count().to_string())
///     }
/// }
///
/// let mut text = Walls::parse("#.#\n..#").unwrap();
/// assert_eq!(<Walls as PartSolver<1>>::solve(&mut text).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Parts may cache work in `input` for later parts.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// Every part of one puzzle behind a single runtime-dispatched entry point.
///
/// Usually derived with `#[derive(PuzzleSolver)]`; a hand-written impl only
/// has to map part numbers onto code.
///
/// ```
/// use puzzle_solver::{PuzzleParser, ParseError, SolveError, Solver};
///
/// struct Rocks;
///
/// impl PuzzleParser for Rocks {
///     type Input<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Rocks {
///     const PARTS: u8 = 1;
///
///     fn solve_part(rows: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(rows.iter().map(|row| row.matches('O').count()).sum::<usize>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut rows = Rocks::parse("O.#\n.OO").unwrap();
/// assert_eq!(Rocks::solve_checked(&mut rows, 1).unwrap(), "3");
/// assert!(matches!(
///     Rocks::solve_checked(&mut rows, 2),
///     Err(SolveError::PartOutOfRange(2))
/// ));
/// ```
pub trait Solver: PuzzleParser {
    /// Highest part number; parts are numbered `1..=PARTS`.
    const PARTS: u8;

    /// Dispatch to the implementation of `part`.
    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;

    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` before dispatching.
    fn solve_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(input, part)
    }
}
