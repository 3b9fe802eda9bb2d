use std::collections::HashSet;

use super::coord::Coord;

/// Ordered walk through a grid with O(1) membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Coord>,
    seen: HashSet<Coord>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coord: Coord) {
        self.steps.push(coord);
        self.seen.insert(coord);
    }

    /// Removes the last step. Steps are distinct, so its membership goes too.
    pub fn pop(&mut self) -> Option<Coord> {
        let coord = self.steps.pop()?;
        self.seen.remove(&coord);
        Some(coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.seen.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    /// Steps to the point of a closed loop farthest from its start.
    pub fn farthest(&self) -> usize {
        self.steps.len() / 2
    }
}
