use proptest::prelude::*;
use puzzle_solutions::utils::arrangements::{ArrangementCounter, Spring};

/// Damaged-run lengths of a fully known row.
fn runs_of(row: &[bool]) -> Vec<usize> {
    row.split(|&damaged| !damaged)
        .map(<[bool]>::len)
        .filter(|&len| len > 0)
        .collect()
}

/// Try every assignment of the unknown springs.
fn brute_force(springs: &[Spring], runs: &[usize]) -> u64 {
    let unknown: Vec<usize> = springs
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Spring::Unknown)
        .map(|(i, _)| i)
        .collect();

    let mut count = 0;
    for mask in 0u32..(1 << unknown.len()) {
        let mut row: Vec<bool> = springs.iter().map(|s| *s == Spring::Damaged).collect();
        for (bit, &i) in unknown.iter().enumerate() {
            row[i] = mask & (1 << bit) != 0;
        }
        if runs_of(&row) == runs {
            count += 1;
        }
    }
    count
}

fn spring() -> impl Strategy<Value = Spring> {
    prop::sample::select(vec![Spring::Operational, Spring::Damaged, Spring::Unknown])
}

proptest! {
    #[test]
    fn counter_matches_brute_force(
        springs in prop::collection::vec(spring(), 0..12),
        runs in prop::collection::vec(1usize..4, 0..4),
    ) {
        let counter = ArrangementCounter::new();
        prop_assert_eq!(counter.count(&springs, &runs), brute_force(&springs, &runs));
    }

    #[test]
    fn shared_counter_agrees_with_fresh_ones(
        rows in prop::collection::vec(
            (prop::collection::vec(spring(), 0..10), prop::collection::vec(1usize..4, 0..3)),
            1..6,
        ),
    ) {
        let shared = ArrangementCounter::new();
        for (springs, runs) in &rows {
            let fresh = ArrangementCounter::new();
            prop_assert_eq!(shared.count(springs, runs), fresh.count(springs, runs));
        }
    }
}
