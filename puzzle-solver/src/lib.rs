//! Puzzle Solver Library
//!
//! A small, type-safe framework for daily puzzle solvers. Each solver parses
//! its input once and answers one or more parts from the parsed data.
//!
//! # Overview
//!
//! - [`PuzzleParser`] turns raw input into shared data
//! - [`PartSolver<N>`] answers part `N`; `#[derive(PuzzleSolver)]` combines
//!   the parts into a [`Solver`]
//! - [`SolverInstance`] parses once and times each part; the registry hands
//!   it out as a [`DynSolver`]
//! - [`RegistryBuilder`] / [`SolverRegistry`] map (year, day) to solvers,
//!   fed by plugins submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver, register_solver,
//! };
//!
//! pub struct Galaxies;
//!
//! impl PuzzleParser for Galaxies {
//!     type Input<'a> = Vec<&'a str>;
//!
//!     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl Solver for Galaxies {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(rows: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(rows.iter().map(|row| row.matches('#').count()).sum::<usize>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Galaxies, 2023, 11);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2023, 11, "#..\n..#\n#..").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! ```
//!
//! # Plugin registration
//!
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegisterSolver)]
//! #[solver(parts = 2)]
//! #[puzzle(year = 2023, day = 16, tags = ["grid", "beam"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver};

// Used by the derive macros
pub use inventory;

pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
