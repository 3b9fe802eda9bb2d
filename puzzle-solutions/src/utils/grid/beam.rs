//! Light beams bouncing through mirrors and splitters.

use std::collections::HashMap;

use super::coord::Coord;
use super::direction::{Direction, DirectionSet};
use super::grid::{Grid, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    /// `/`
    Forward,
    /// `\`
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Splitter {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamTile {
    Empty,
    Mirror(Mirror),
    Splitter(Splitter),
}

impl Tile for BeamTile {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '.' => BeamTile::Empty,
            '/' => BeamTile::Mirror(Mirror::Forward),
            '\\' => BeamTile::Mirror(Mirror::Backward),
            '|' => BeamTile::Splitter(Splitter::Vertical),
            '-' => BeamTile::Splitter(Splitter::Horizontal),
            _ => return None,
        })
    }

    fn to_char(self) -> char {
        match self {
            BeamTile::Empty => '.',
            BeamTile::Mirror(Mirror::Forward) => '/',
            BeamTile::Mirror(Mirror::Backward) => '\\',
            BeamTile::Splitter(Splitter::Vertical) => '|',
            BeamTile::Splitter(Splitter::Horizontal) => '-',
        }
    }
}

impl Direction {
    /// Direction of travel after bouncing off `mirror`.
    pub const fn reflect(self, mirror: Mirror) -> Direction {
        use Direction::*;
        match (mirror, self) {
            (Mirror::Forward, East) => North,
            (Mirror::Forward, West) => South,
            (Mirror::Forward, North) => East,
            (Mirror::Forward, South) => West,
            (Mirror::Backward, East) => South,
            (Mirror::Backward, West) => North,
            (Mirror::Backward, North) => West,
            (Mirror::Backward, South) => East,
        }
    }

    /// The two outgoing directions when hitting `splitter` side-on, or `None`
    /// when travelling along its axis.
    pub const fn split(self, splitter: Splitter) -> Option<(Direction, Direction)> {
        match (splitter, self.is_vertical()) {
            (Splitter::Vertical, false) => Some((Direction::North, Direction::South)),
            (Splitter::Horizontal, true) => Some((Direction::West, Direction::East)),
            _ => None,
        }
    }
}

/// Every `(coord, direction)` pair a beam has entered.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    cells: HashMap<Coord, DirectionSet>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair; returns `false` if it was seen before.
    pub fn visit(&mut self, coord: Coord, direction: Direction) -> bool {
        self.cells.entry(coord).or_default().insert(direction)
    }

    pub fn contains(&self, coord: Coord, direction: Direction) -> bool {
        self.cells
            .get(&coord)
            .is_some_and(|set| set.contains(direction))
    }

    pub fn is_energized(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of distinct coordinates entered.
    pub fn energized(&self) -> usize {
        self.cells.len()
    }

    /// Number of distinct `(coord, direction)` pairs entered.
    pub fn pairs(&self) -> usize {
        self.cells.values().map(|set| set.len()).sum()
    }
}

/// Follow a beam entering `start` while travelling `direction`.
///
/// Splitters push both children onto a work stack; a pair already in the
/// visited set ends that branch, so mirror loops terminate.
pub fn trace(grid: &Grid<BeamTile>, start: Coord, direction: Direction) -> VisitedSet {
    let mut visited = VisitedSet::new();
    if !grid.contains(start) {
        return visited;
    }

    let mut work = vec![(start, direction)];
    while let Some((coord, direction)) = work.pop() {
        if !visited.visit(coord, direction) {
            continue;
        }
        let Some(&tile) = grid.tile_at(coord) else {
            continue;
        };

        let mut advance = |dir: Direction| {
            if let Some(next) = grid.step(coord, dir) {
                work.push((next, dir));
            }
        };

        match tile {
            BeamTile::Empty => advance(direction),
            BeamTile::Mirror(mirror) => advance(direction.reflect(mirror)),
            BeamTile::Splitter(splitter) => match direction.split(splitter) {
                Some((a, b)) => {
                    tracing::trace!(%coord, ?direction, "beam split");
                    advance(a);
                    advance(b);
                }
                None => advance(direction),
            },
        }
    }
    visited
}

/// Energized tile count for a beam entering `start` heading `direction`.
pub fn energized(grid: &Grid<BeamTile>, start: Coord, direction: Direction) -> usize {
    trace(grid, start, direction).energized()
}

/// Every edge cell paired with the inward direction a beam would enter with.
///
/// Corner cells appear once per edge they sit on.
pub fn edge_entries(grid: &Grid<BeamTile>) -> Vec<(Coord, Direction)> {
    let (rows, cols) = grid.dimensions();
    let mut entries = Vec::with_capacity(2 * (rows + cols));
    for col in 0..cols {
        entries.push((Coord::new(0, col), Direction::South));
        entries.push((Coord::new(rows - 1, col), Direction::North));
    }
    for row in 0..rows {
        entries.push((Coord::new(row, 0), Direction::East));
        entries.push((Coord::new(row, cols - 1), Direction::West));
    }
    entries
}

/// Largest energized count over all edge entries.
pub fn best_energized(grid: &Grid<BeamTile>) -> usize {
    edge_entries(grid)
        .into_iter()
        .map(|(start, direction)| energized(grid, start, direction))
        .max()
        .unwrap_or(0)
}

/// The grid with energized cells drawn as `#` and the rest as `.`.
pub fn render_energized(grid: &Grid<BeamTile>, visited: &VisitedSet) -> String {
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));
    for row in 0..rows {
        if row > 0 {
            out.push('\n');
        }
        out.extend((0..cols).map(|col| {
            if visited.is_energized(Coord::new(row, col)) {
                '#'
            } else {
                '.'
            }
        }));
    }
    out
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

    fn parse(input: &str) -> Grid<BeamTile> {
        Grid::parse(input).unwrap()
    }

    #[test]
    fn reflect_table() {
        use Direction::*;
        let forward = [(East, North), (West, South), (North, East), (South, West)];
        for (incoming, outgoing) in forward {
            assert_eq!(incoming.reflect(Mirror::Forward), outgoing);
        }
        let backward = [(East, South), (West, North), (North, West), (South, East)];
        for (incoming, outgoing) in backward {
            assert_eq!(incoming.reflect(Mirror::Backward), outgoing);
        }
    }

    #[test]
    fn split_only_side_on() {
        use Direction::*;
        assert_eq!(East.split(Splitter::Vertical), Some((North, South)));
        assert_eq!(West.split(Splitter::Vertical), Some((North, South)));
        assert_eq!(North.split(Splitter::Vertical), None);
        assert_eq!(North.split(Splitter::Horizontal), Some((West, East)));
        assert_eq!(South.split(Splitter::Horizontal), Some((West, East)));
        assert_eq!(East.split(Splitter::Horizontal), None);
    }

    #[test]
    fn example_energizes_46() {
        let grid = parse(EXAMPLE);
        let visited = trace(&grid, Coord::new(0, 0), Direction::East);
        assert_eq!(visited.energized(), 46);
        assert_eq!(
            render_energized(&grid, &visited),
            "######....
.#...#....
.#...#####
.#...##...
.#...##...
.#...##...
.#..####..
########..
.#######..
.#...#.#.."
        );
    }

    #[test]
    fn example_best_entry_is_51() {
        let grid = parse(EXAMPLE);
        assert_eq!(best_energized(&grid), 51);
        assert_eq!(energized(&grid, Coord::new(0, 3), Direction::South), 51);
    }

    #[test]
    fn empty_row_lights_every_cell_once() {
        let grid = parse(&vec![".........."; 10].join("\n"));
        let visited = trace(&grid, Coord::new(0, 0), Direction::East);
        assert_eq!(visited.energized(), 10);
        assert_eq!(visited.pairs(), 10);
    }

    #[test]
    fn mirror_cycle_terminates() {
        let grid = parse("/\\\n\\/");
        let visited = trace(&grid, Coord::new(0, 0), Direction::North);
        assert_eq!(visited.energized(), 4);
        assert!(visited.contains(Coord::new(0, 0), Direction::North));
        assert!(visited.contains(Coord::new(1, 0), Direction::West));
        assert!(visited.pairs() <= 2 * 2 * 2 * 4);
    }

    #[test]
    fn edge_entries_cover_perimeter() {
        let grid = parse("...\n...");
        let entries = edge_entries(&grid);
        assert_eq!(entries.len(), 2 * (2 + 3));
        assert!(entries.contains(&(Coord::new(1, 2), Direction::West)));
        assert!(entries.contains(&(Coord::new(1, 1), Direction::North)));
    }
}
