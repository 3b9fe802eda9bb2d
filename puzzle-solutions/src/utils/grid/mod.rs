//! 2-D grid kernel: coordinates, direction algebra, tile buffers and the
//! traversals built on them.
//!
//! ```
//! use puzzle_solutions::utils::grid::{Coord, Direction, Grid, beam};
//!
//! let grid = Grid::parse(".\\\n./").unwrap();
//! assert_eq!(beam::energized(&grid, Coord::new(0, 0), Direction::East), 4);
//! ```

pub mod beam;
mod coord;
mod direction;
#[allow(clippy::module_inception)]
mod grid;
mod path;
pub mod pipe;

pub use beam::{BeamTile, Mirror, Splitter, VisitedSet};
pub use coord::Coord;
pub use direction::{Direction, DirectionSet};
pub use grid::{Grid, GridError, Tile};
pub use path::Path;
pub use pipe::{PipeError, PipeMaze, PipeTile};
