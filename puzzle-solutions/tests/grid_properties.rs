use proptest::prelude::*;
use puzzle_solutions::my_solutions::year_2023::day_14::{Rock, spin, tilt};
use puzzle_solutions::utils::grid::beam::{self, BeamTile};
use puzzle_solutions::utils::grid::{Coord, Direction, Grid, PipeMaze};

/// Rectangular grid text over `alphabet`, 1..=8 on each side.
fn grid_text(alphabet: &'static [char]) -> impl Strategy<Value = String> {
    (1usize..=8, 1usize..=8).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(prop::sample::select(alphabet), rows * cols).prop_map(move |cells| {
            cells
                .chunks(cols)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

const BEAM_TILES: &[char] = &['.', '.', '.', '/', '\\', '|', '-'];
const ROCKS: &[char] = &['.', '.', 'O', '#'];
const PIPES: &[char] = &['.', '|', '-', 'L', 'J', '7', 'F'];

/// `text` with the cell at (`row`, `col`), wrapped into range, replaced by `S`.
fn with_start(text: &str, row: usize, col: usize) -> String {
    let mut lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    let row = row % lines.len();
    let col = col % lines[row].len();
    lines[row][col] = 'S';
    lines
        .iter()
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn round_rocks(grid: &Grid<Rock>) -> usize {
    grid.cells().iter().filter(|&&r| r == Rock::Round).count()
}

proptest! {
    #[test]
    fn step_never_leaves_grid(
        text in grid_text(BEAM_TILES),
        row in 0usize..8,
        col in 0usize..8,
        dir in direction(),
    ) {
        let grid: Grid<BeamTile> = Grid::parse(&text).unwrap();
        let (rows, cols) = grid.dimensions();
        let here = Coord::new(row % rows, col % cols);
        if let Some(next) = grid.step(here, dir) {
            prop_assert!(grid.contains(next));
            prop_assert!(grid.tile_at(next).is_some());
            prop_assert_eq!(here.manhattan(next), 1);
        }
    }

    #[test]
    fn energized_count_is_bounded(text in grid_text(BEAM_TILES), dir in direction()) {
        let grid: Grid<BeamTile> = Grid::parse(&text).unwrap();
        let (rows, cols) = grid.dimensions();
        let visited = beam::trace(&grid, Coord::new(0, 0), dir);
        prop_assert!(visited.energized() >= 1);
        prop_assert!(visited.energized() <= rows * cols);
        prop_assert!(visited.pairs() <= rows * cols * 4);
    }

    #[test]
    fn tracing_is_deterministic(text in grid_text(BEAM_TILES), dir in direction()) {
        let grid: Grid<BeamTile> = Grid::parse(&text).unwrap();
        let first = beam::trace(&grid, Coord::new(0, 0), dir);
        let second = beam::trace(&grid, Coord::new(0, 0), dir);
        prop_assert_eq!(
            beam::render_energized(&grid, &first),
            beam::render_energized(&grid, &second)
        );
        prop_assert_eq!(first.pairs(), second.pairs());
    }

    #[test]
    fn best_entry_beats_top_left(text in grid_text(BEAM_TILES)) {
        let grid: Grid<BeamTile> = Grid::parse(&text).unwrap();
        let from_corner = beam::energized(&grid, Coord::new(0, 0), Direction::East);
        prop_assert!(beam::best_energized(&grid) >= from_corner);
    }

    #[test]
    fn tilting_keeps_every_rock(text in grid_text(ROCKS), dir in direction()) {
        let original: Grid<Rock> = Grid::parse(&text).unwrap();
        let mut tilted = original.clone();
        tilt(&mut tilted, dir);
        prop_assert_eq!(round_rocks(&tilted), round_rocks(&original));

        // Cubes never move.
        for (coord, &rock) in original.iter() {
            if rock == Rock::Cube {
                prop_assert_eq!(tilted.tile_at(coord), Some(&Rock::Cube));
            }
        }

        // Tilting twice the same way changes nothing further.
        let mut again = tilted.clone();
        tilt(&mut again, dir);
        prop_assert_eq!(again, tilted);
    }

    #[test]
    fn spin_keeps_every_rock(text in grid_text(ROCKS)) {
        let original: Grid<Rock> = Grid::parse(&text).unwrap();
        let mut spun = original.clone();
        spin(&mut spun);
        prop_assert_eq!(round_rocks(&spun), round_rocks(&original));
    }

    #[test]
    fn loop_search_is_deterministic(text in grid_text(PIPES), row in 0usize..8, col in 0usize..8) {
        // Most random starts are malformed; those have nothing to search.
        if let Ok(maze) = PipeMaze::parse(&with_start(&text, row, col)) {
            let first = maze.find_loop();
            prop_assert_eq!(&first, &maze.find_loop());
            if let Some(path) = first {
                // Grid cycles alternate colors, so they have even length.
                prop_assert!(path.len() >= 4);
                prop_assert_eq!(path.len() % 2, 0);
                prop_assert_eq!(path.steps()[0], maze.start());
                prop_assert!(maze.enclosed_tiles(&path) <= maze.grid().rows() * maze.grid().cols());
            }
        }
    }
}
