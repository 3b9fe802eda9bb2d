//! Parsed, timed solvers behind the object-safe [`DynSolver`] interface

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use chrono::{TimeDelta, Utc};

/// One answered part and the wall-clock time it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub elapsed: TimeDelta,
}

/// Run `f`, returning its output and how long it ran.
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// Input parsed by `S`, ready for any of its parts.
pub struct SolverInstance<'a, S: Solver> {
    input: S::Input<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(raw: &'a str) -> Result<Self, ParseError> {
        let (input, parse_time) = timed(|| S::parse(raw));
        Ok(Self {
            input: input?,
            parse_time,
        })
    }
}

/// What the runner needs from a parsed solver, independent of its type.
///
/// ```no_run
/// use puzzle_solver::DynSolver;
///
/// fn answers(solver: &mut dyn DynSolver) -> Vec<String> {
///     (1..=solver.parts())
///         .filter_map(|part| solver.solve(part).ok())
///         .map(|result| result.answer)
///         .collect()
/// }
/// ```
pub trait DynSolver {
    fn parts(&self) -> u8;

    fn parse_time(&self) -> TimeDelta;

    /// Solve `part`; parts outside `1..=parts()` fail with
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, elapsed) = timed(|| S::solve_checked(&mut self.input, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            elapsed,
        })
    }
}
