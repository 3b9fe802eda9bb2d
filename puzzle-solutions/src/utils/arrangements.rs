//! Counting the ways damaged-spring runs fit a partially known row.

use std::fmt;

use thiserror::Error;

use super::dp_cache::{DpCache, DpProblem, HashMapBackend};
use super::grid::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spring {
    Operational,
    Damaged,
    Unknown,
}

impl Tile for Spring {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Spring::Operational),
            '#' => Some(Spring::Damaged),
            '?' => Some(Spring::Unknown),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Spring::Operational => '.',
            Spring::Damaged => '#',
            Spring::Unknown => '?',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: expected '<springs> <runs>'")]
    MissingRuns { line: usize },
    #[error("line {line}: invalid spring {found:?} at column {col}")]
    InvalidSpring { line: usize, col: usize, found: char },
    #[error("line {line}: invalid run length {found:?}")]
    InvalidRun { line: usize, found: String },
    #[error("line {line}: run lengths must be positive")]
    ZeroRun { line: usize },
}

/// One row of the condition report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpringRecord {
    pub springs: Vec<Spring>,
    pub runs: Vec<usize>,
}

impl SpringRecord {
    /// Parse `???.### 1,1,3`. `line` is 1-based and only used for errors.
    pub fn parse(line: usize, text: &str) -> Result<Self, RecordError> {
        let (springs, runs) = text
            .split_once(' ')
            .ok_or(RecordError::MissingRuns { line })?;

        let springs = springs
            .chars()
            .enumerate()
            .map(|(col, c)| {
                Spring::from_char(c).ok_or(RecordError::InvalidSpring {
                    line,
                    col,
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let runs = runs
            .split(',')
            .map(|run| match run.trim().parse::<usize>() {
                Ok(0) => Err(RecordError::ZeroRun { line }),
                Ok(n) => Ok(n),
                Err(_) => Err(RecordError::InvalidRun {
                    line,
                    found: run.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { springs, runs })
    }

    /// Parse every non-empty line of `input`.
    pub fn parse_all(input: &str) -> Result<Vec<Self>, RecordError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, text)| Self::parse(i + 1, text))
            .collect()
    }

    /// The record repeated `times` times: springs joined by `?`, runs
    /// concatenated.
    pub fn unfold(&self, times: usize) -> Self {
        let mut springs = Vec::with_capacity((self.springs.len() + 1) * times);
        for i in 0..times {
            if i > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }
        Self {
            springs,
            runs: self.runs.repeat(times),
        }
    }
}

impl fmt::Display for SpringRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for spring in &self.springs {
            write!(f, "{}", spring.to_char())?;
        }
        let runs: Vec<String> = self.runs.iter().map(usize::to_string).collect();
        write!(f, " {}", runs.join(","))
    }
}

/// Remaining springs and runs still to be placed.
type Suffix<'a> = (&'a [Spring], &'a [usize]);

/// Places a run of `len` damaged springs at the front of `springs`.
///
/// Returns what is left after the run and its separator, or `None` if the
/// run does not fit there.
fn place_run(springs: &[Spring], len: usize) -> Option<&[Spring]> {
    let run = springs.get(..len)?;
    if run.contains(&Spring::Operational) {
        return None;
    }
    match springs.get(len) {
        None => Some(&springs[len..]),
        Some(Spring::Damaged) => None,
        Some(_) => Some(&springs[len + 1..]),
    }
}

/// Recursive split on the first spring. Leaves (no dependencies) are scored
/// directly: 1 when every run is placed and nothing damaged remains.
struct Arrangements;

impl<'a> DpProblem<Suffix<'a>, u64> for Arrangements {
    fn deps(&self, &(springs, runs): &Suffix<'a>) -> Vec<Suffix<'a>> {
        let (Some(first), Some((&run, rest_runs))) = (springs.first(), runs.split_first()) else {
            return Vec::new();
        };

        let mut deps = Vec::with_capacity(2);
        if *first != Spring::Damaged {
            deps.push((&springs[1..], runs));
        }
        if *first != Spring::Operational {
            if let Some(rest) = place_run(springs, run) {
                deps.push((rest, rest_runs));
            }
        }
        deps
    }

    fn compute(&self, &(springs, runs): &Suffix<'a>, deps: Vec<u64>) -> u64 {
        if deps.is_empty() {
            u64::from(runs.is_empty() && !springs.contains(&Spring::Damaged))
        } else {
            deps.iter().sum()
        }
    }
}

/// Memoized arrangement counter.
///
/// The cache borrows the rows it has seen, so one counter lives for one pass
/// over a set of records and shares suffix results between them.
pub struct ArrangementCounter<'a> {
    cache: DpCache<Suffix<'a>, u64, HashMapBackend<Suffix<'a>, u64>, Arrangements>,
}

impl<'a> ArrangementCounter<'a> {
    pub fn new() -> Self {
        Self {
            cache: DpCache::with_problem(HashMapBackend::new(), Arrangements),
        }
    }

    pub fn count(&self, springs: &'a [Spring], runs: &'a [usize]) -> u64 {
        self.cache.get(&(springs, runs))
    }

    pub fn count_record(&self, record: &'a SpringRecord) -> u64 {
        self.count(&record.springs, &record.runs)
    }

    /// Number of memoized suffix pairs.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for ArrangementCounter<'_> {
    fn default() -> Self {
        Self::new()
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

    fn springs(text: &str) -> Vec<Spring> {
        text.chars().map(|c| Spring::from_char(c).unwrap()).collect()
    }

    #[test]
    fn small_counts() {
        let empty: Vec<Spring> = Vec::new();
        let two_damaged = springs("##");
        let unknowns = springs("???");
        let counter = ArrangementCounter::new();
        assert_eq!(counter.count(&empty, &[]), 1);
        assert_eq!(counter.count(&empty, &[1]), 0);
        assert_eq!(counter.count(&two_damaged, &[2]), 1);
        assert_eq!(counter.count(&two_damaged, &[]), 0);
        assert_eq!(counter.count(&unknowns, &[1, 1]), 1);
        assert_eq!(counter.count(&unknowns, &[1]), 3);
        assert_eq!(counter.count(&unknowns, &[4]), 0);
    }

    #[test]
    fn example_rows() {
        let records = SpringRecord::parse_all(EXAMPLE).unwrap();
        let counter = ArrangementCounter::new();
        let counts: Vec<u64> = records.iter().map(|r| counter.count_record(r)).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        assert!(counter.cached() > 0);
    }

    #[test]
    fn unfolded_example_rows() {
        let unfolded: Vec<SpringRecord> = SpringRecord::parse_all(EXAMPLE)
            .unwrap()
            .iter()
            .map(|r| r.unfold(5))
            .collect();
        let counter = ArrangementCounter::new();
        let counts: Vec<u64> = unfolded.iter().map(|r| counter.count_record(r)).collect();
        assert_eq!(counts, vec![1, 16384, 1, 16, 2500, 506250]);
        assert_eq!(counts.iter().sum::<u64>(), 525152);
    }

    #[test]
    fn unfold_joins_with_unknown() {
        let record = SpringRecord::parse(1, ".# 1").unwrap();
        assert_eq!(record.unfold(5).to_string(), ".#?.#?.#?.#?.# 1,1,1,1,1");
        assert_eq!(record.unfold(1), record);
    }

    #[test]
    fn place_run_respects_separators() {
        let row = springs("##?#");
        assert_eq!(place_run(&row, 2), Some(&row[3..]));
        assert_eq!(place_run(&row, 3), None);
        assert_eq!(place_run(&row, 4), Some(&row[4..]));
        assert_eq!(place_run(&row, 5), None);
        assert_eq!(place_run(&springs("#.#"), 2), None);
    }

    #[test]
    fn malformed_records() {
        assert_eq!(
            SpringRecord::parse(3, "???").unwrap_err(),
            RecordError::MissingRuns { line: 3 }
        );
        assert_eq!(
            SpringRecord::parse(1, "?x? 1").unwrap_err(),
            RecordError::InvalidSpring {
                line: 1,
                col: 1,
                found: 'x'
            }
        );
        assert_eq!(
            SpringRecord::parse(2, "??? 1,a").unwrap_err(),
            RecordError::InvalidRun {
                line: 2,
                found: "a".to_string()
            }
        );
        assert_eq!(
            SpringRecord::parse(4, "??? 0").unwrap_err(),
            RecordError::ZeroRun { line: 4 }
        );
        assert_eq!(
            SpringRecord::parse_all("??? 1\n?? x").unwrap_err().to_string(),
            "line 2: invalid run length \"x\""
        );
    }
}
