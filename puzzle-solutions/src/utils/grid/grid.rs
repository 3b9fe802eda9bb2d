use std::fmt;

use thiserror::Error;

use super::coord::Coord;
use super::direction::Direction;

/// A cell type that round-trips through a single input character.
pub trait Tile: Copy {
    fn from_char(c: char) -> Option<Self>;

    fn to_char(self) -> char;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid tile {found:?} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, found: char },
}

/// Fixed-size, row-major 2-D buffer of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Tile> Grid<T> {
    /// Parse newline-separated rows of tile characters.
    ///
    /// Rows must all have the same width and contain only characters `T`
    /// recognizes.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut cols = None;
        let mut rows = 0;
        let mut cells = Vec::with_capacity(input.len());

        for (row, line) in input.lines().enumerate() {
            let before = cells.len();
            for (col, c) in line.chars().enumerate() {
                let tile = T::from_char(c).ok_or(GridError::InvalidTile { row, col, found: c })?;
                cells.push(tile);
            }
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        match cols {
            Some(cols) if cols > 0 => Ok(Self { rows, cols, cells }),
            _ => Err(GridError::Empty),
        }
    }
}

impl<T> Grid<T> {
    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then_some(coord.row * self.cols + coord.col)
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&T> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Replace the tile at `coord`; returns `false` if it is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: T) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Neighbor of `coord` in `direction`, or `None` when the move leaves the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord
            .checked_step(direction)
            .filter(|&next| self.contains(next))
    }

    /// In-bounds cells touching `coord`, diagonals included, in row-major
    /// order.
    pub fn surrounding(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let rows = coord.row.saturating_sub(1)..=coord.row + 1;
        rows.flat_map(move |row| {
            (coord.col.saturating_sub(1)..=coord.col + 1).map(move |col| Coord::new(row, col))
        })
        .filter(move |&near| near != coord && self.contains(near))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// `(coord, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Copy> Grid<T> {
    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows)
            .map(|row| self.cells[row * self.cols + col])
            .collect()
    }
}

impl<T: Tile> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for tile in self.row(row) {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}
