use puzzle_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder,
    SolveError, Solver,
};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2019, day = 3, tags = ["macro-test", "rows"])]
struct RowLengths;

impl PuzzleParser for RowLengths {
    type Input<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no rows".into()));
        }
        Ok(input.lines().map(str::len).collect())
    }
}

impl PartSolver<1> for RowLengths {
    fn solve(rows: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for RowLengths {
    fn solve(rows: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().max().copied().unwrap_or(0).to_string())
    }
}

#[test]
fn derived_solver_dispatches_each_part() {
    let mut rows = RowLengths::parse("...\n.\n.....").unwrap();
    assert_eq!(RowLengths::PARTS, 2);
    assert_eq!(RowLengths::solve_part(&mut rows, 1).unwrap(), "9");
    assert_eq!(RowLengths::solve_part(&mut rows, 2).unwrap(), "5");
}

#[test]
fn derived_solver_rejects_unknown_part() {
    let mut rows = RowLengths::parse("..").unwrap();
    assert!(matches!(
        RowLengths::solve_part(&mut rows, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn plugin_is_registered_with_tags() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let info = registry.info(2019, 3).expect("plugin registered");
    assert_eq!(info.parts, 2);

    let mut solver = registry.create_solver(2019, 3, "..\n....").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "4");
}

#[test]
fn tag_filter_excludes_plugin() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(registry.is_empty());
}
