//! Pipe mazes: a single loop of connected pipes through a field of junk.

use thiserror::Error;

use super::coord::Coord;
use super::direction::{Direction, DirectionSet};
use super::grid::{Grid, GridError, Tile};
use super::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeTile {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
    Ground,
    /// `S`, until the maze resolves it to a real pipe.
    Start,
}

impl PipeTile {
    const PIPES: [PipeTile; 6] = [
        PipeTile::Vertical,
        PipeTile::Horizontal,
        PipeTile::NorthEast,
        PipeTile::NorthWest,
        PipeTile::SouthWest,
        PipeTile::SouthEast,
    ];

    pub const fn connections(self) -> DirectionSet {
        use Direction::*;
        match self {
            PipeTile::Vertical => DirectionSet::of(&[North, South]),
            PipeTile::Horizontal => DirectionSet::of(&[East, West]),
            PipeTile::NorthEast => DirectionSet::of(&[North, East]),
            PipeTile::NorthWest => DirectionSet::of(&[North, West]),
            PipeTile::SouthWest => DirectionSet::of(&[South, West]),
            PipeTile::SouthEast => DirectionSet::of(&[South, East]),
            PipeTile::Ground => DirectionSet::EMPTY,
            PipeTile::Start => DirectionSet::of(&Direction::ALL),
        }
    }

    /// The pipe joining exactly `connections`, if there is one.
    pub fn from_connections(connections: DirectionSet) -> Option<Self> {
        Self::PIPES
            .into_iter()
            .find(|pipe| pipe.connections() == connections)
    }
}

impl Tile for PipeTile {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '|' => PipeTile::Vertical,
            '-' => PipeTile::Horizontal,
            'L' => PipeTile::NorthEast,
            'J' => PipeTile::NorthWest,
            '7' => PipeTile::SouthWest,
            'F' => PipeTile::SouthEast,
            '.' => PipeTile::Ground,
            'S' => PipeTile::Start,
            _ => return None,
        })
    }

    fn to_char(self) -> char {
        match self {
            PipeTile::Vertical => '|',
            PipeTile::Horizontal => '-',
            PipeTile::NorthEast => 'L',
            PipeTile::NorthWest => 'J',
            PipeTile::SouthWest => '7',
            PipeTile::SouthEast => 'F',
            PipeTile::Ground => '.',
            PipeTile::Start => 'S',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("no start tile 'S' in the maze")]
    MissingStart,
    #[error("maze has {0} start tiles, expected one")]
    MultipleStarts(usize),
    #[error("start tile at {coord} has {found} connecting neighbors, expected 2")]
    MalformedStart { coord: Coord, found: usize },
}

/// A pipe grid whose start tile has been replaced by the pipe it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeMaze {
    grid: Grid<PipeTile>,
    start: Coord,
}

impl PipeMaze {
    pub fn parse(input: &str) -> Result<Self, PipeError> {
        Self::from_grid(Grid::parse(input)?)
    }

    /// Locate the single `S` and resolve it from the neighbors that connect
    /// back into it.
    pub fn from_grid(mut grid: Grid<PipeTile>) -> Result<Self, PipeError> {
        let starts: Vec<Coord> = grid
            .iter()
            .filter(|(_, tile)| **tile == PipeTile::Start)
            .map(|(coord, _)| coord)
            .collect();
        let start = match starts.as_slice() {
            [] => return Err(PipeError::MissingStart),
            [start] => *start,
            many => return Err(PipeError::MultipleStarts(many.len())),
        };

        let connections: DirectionSet = Direction::ALL
            .into_iter()
            .filter(|&direction| connects_back(&grid, start, direction))
            .collect();
        let pipe = match connections.len() {
            2 => PipeTile::from_connections(connections),
            _ => None,
        }
        .ok_or(PipeError::MalformedStart {
            coord: start,
            found: connections.len(),
        })?;

        grid.set(start, pipe);
        Ok(Self { grid, start })
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn grid(&self) -> &Grid<PipeTile> {
        &self.grid
    }

    /// Neighbors of `coord` joined to it by pipe on both sides, in canonical
    /// direction order.
    pub fn connected_neighbors(&self, coord: Coord) -> Vec<Coord> {
        let Some(tile) = self.grid.tile_at(coord) else {
            return Vec::new();
        };
        tile.connections()
            .iter()
            .filter(|&direction| connects_back(&self.grid, coord, direction))
            .filter_map(|direction| self.grid.step(coord, direction))
            .collect()
    }

    /// Depth-first search from the start for the first closed loop.
    ///
    /// The returned path lists each loop tile once, starting at the start tile.
    pub fn find_loop(&self) -> Option<Path> {
        let mut path = Path::new();
        path.push(self.start);
        let mut stack = vec![self.connected_neighbors(self.start).into_iter()];

        loop {
            let candidates = stack.last_mut()?;
            match candidates.next() {
                Some(next) if next == self.start && path.len() > 2 => return Some(path),
                Some(next) if path.contains(next) => {}
                Some(next) => {
                    path.push(next);
                    stack.push(self.connected_neighbors(next).into_iter());
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }
    }

    /// Tiles strictly inside `main_loop`, counted with a row parity sweep.
    ///
    /// Crossing a loop tile that connects North toggles "inside"; tiles off
    /// the loop count as empty regardless of their symbol.
    pub fn enclosed_tiles(&self, main_loop: &Path) -> usize {
        let mut enclosed = 0;
        for row in 0..self.grid.rows() {
            let mut inside = false;
            for (col, tile) in self.grid.row(row).iter().enumerate() {
                if main_loop.contains(Coord::new(row, col)) {
                    if tile.connections().contains(Direction::North) {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1;
                }
            }
        }
        enclosed
    }
}

/// Whether the neighbor of `coord` in `direction` has a pipe pointing back.
fn connects_back(grid: &Grid<PipeTile>, coord: Coord, direction: Direction) -> bool {
    grid.step(coord, direction)
        .and_then(|next| grid.tile_at(next))
        .is_some_and(|tile| tile.connections().contains(direction.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = ".....
.S-7.
.|.|.
.L-J.
.....";

    const NOISY_SQUARE: &str = "-L|F7
7S-7|
L|7||
-L-J|
L|-JF";

    const WINDING: &str = "..F7.
.FJ|.
SJ.L7
|F--J
LJ...";

    const ENCLOSED_FOUR: &str = "...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";

    const ENCLOSED_EIGHT: &str = ".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";

    #[test]
    fn start_resolves_to_real_pipe() {
        let maze = PipeMaze::parse(SQUARE).unwrap();
        assert_eq!(maze.start(), Coord::new(1, 1));
        assert_eq!(maze.grid().tile_at(maze.start()), Some(&PipeTile::SouthEast));

        let maze = PipeMaze::parse(WINDING).unwrap();
        assert_eq!(maze.grid().tile_at(maze.start()), Some(&PipeTile::SouthEast));
    }

    #[test]
    fn square_loop_has_eight_tiles() {
        let maze = PipeMaze::parse(SQUARE).unwrap();
        let main_loop = maze.find_loop().unwrap();
        assert_eq!(main_loop.len(), 8);
        assert_eq!(main_loop.farthest(), 4);
        assert_eq!(main_loop.steps()[0], Coord::new(1, 1));
        // South comes before East in canonical order.
        assert_eq!(main_loop.steps()[1], Coord::new(2, 1));
    }

    #[test]
    fn junk_pipes_are_ignored() {
        let maze = PipeMaze::parse(NOISY_SQUARE).unwrap();
        assert_eq!(maze.find_loop().unwrap().farthest(), 4);
    }

    #[test]
    fn winding_loop_farthest_is_eight() {
        let maze = PipeMaze::parse(WINDING).unwrap();
        assert_eq!(maze.find_loop().unwrap().farthest(), 8);
    }

    #[test]
    fn enclosed_examples() {
        for (input, expected) in [(ENCLOSED_FOUR, 4), (ENCLOSED_EIGHT, 8), (SQUARE, 1)] {
            let maze = PipeMaze::parse(input).unwrap();
            let main_loop = maze.find_loop().unwrap();
            assert_eq!(maze.enclosed_tiles(&main_loop), expected);
        }
    }

    #[test]
    fn start_errors() {
        assert_eq!(PipeMaze::parse("...\n.-.").unwrap_err(), PipeError::MissingStart);
        assert_eq!(
            PipeMaze::parse("S.S").unwrap_err(),
            PipeError::MultipleStarts(2)
        );
        assert_eq!(
            PipeMaze::parse(".|.\n-S-\n...").unwrap_err(),
            PipeError::MalformedStart {
                coord: Coord::new(1, 1),
                found: 3
            }
        );
        assert_eq!(
            PipeMaze::parse("...\n.S.\n...").unwrap_err(),
            PipeError::MalformedStart {
                coord: Coord::new(1, 1),
                found: 0
            }
        );
        assert!(matches!(
            PipeMaze::parse("S-x").unwrap_err(),
            PipeError::Grid(GridError::InvalidTile { found: 'x', .. })
        ));
    }

    #[test]
    fn dead_end_has_no_loop() {
        // Two pipes meet at the start but never close.
        let maze = PipeMaze::parse("S-.\n|..").unwrap();
        assert!(maze.find_loop().is_none());
    }
}
