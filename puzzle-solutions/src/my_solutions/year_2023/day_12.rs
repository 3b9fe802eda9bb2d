use puzzle_solver::{PuzzleParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{PuzzleSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::arrangements::{ArrangementCounter, SpringRecord};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 12, tags = ["memo", "springs"])]
pub struct Solver;

const UNFOLD_TIMES: usize = 5;

impl PuzzleParser for Solver {
    type Input<'a> = Vec<SpringRecord>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let records =
            SpringRecord::parse_all(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        debug!(records = records.len(), "parsed condition records");
        Ok(records)
    }
}

fn total_arrangements(records: &[SpringRecord]) -> u64 {
    let counter = ArrangementCounter::new();
    let total: u64 = records.iter().map(|r| counter.count_record(r)).sum();
    debug!(cached = counter.cached(), total, "counted arrangements");
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_arrangements(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let unfolded: Vec<SpringRecord> = shared.iter().map(|r| r.unfold(UNFOLD_TIMES)).collect();
        Ok(total_arrangements(&unfolded).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

    #[test]
    fn example_answers() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "21");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "525152");
    }

    #[test]
    fn bad_record_reports_line() {
        let err = Solver::parse("???.### 1,1,3\n.??. one").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFormat(msg) if msg == "line 2: invalid run length \"one\""
        ));
    }
}
